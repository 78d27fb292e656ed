//! Command implementations.
//!
//! Axgen has exactly one command — the scaffold — invoked by running the
//! binary with no subcommand.

pub mod scaffold;
