//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the one
//! high-level use case: "apply a blueprint to the filesystem".

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldReport, ScaffoldService};
