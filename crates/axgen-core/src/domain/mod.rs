//! Core domain layer for Axgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All filesystem concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: A blueprint is defined once and read-only after

// Public API - what the world sees
pub mod blueprint;
pub mod error;

// Re-exports for convenience
pub use blueprint::{Blueprint, FileSpec};
pub use error::{DomainError, ErrorCategory};
