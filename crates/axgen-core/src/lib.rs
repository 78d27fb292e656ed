//! Axgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Axgen
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            axgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     axgen-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │         (Blueprint, FileSpec)           │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use axgen_core::{
//!     application::ScaffoldService,
//!     domain::Blueprint,
//! };
//!
//! // 1. Define (or load) a blueprint
//! let blueprint = Blueprint::new("my_backend")
//!     .with_directory("api/routers")
//!     .with_file("api/main.py", "FastAPI app instance and router setup");
//!
//! // 2. Use application service (with injected adapter)
//! let service = ScaffoldService::new(filesystem);
//! let report = service.apply(&blueprint).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldReport, ScaffoldService, ports::Filesystem};
    pub use crate::domain::{Blueprint, FileSpec};
    pub use crate::error::{AxgenError, AxgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
