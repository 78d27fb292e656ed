//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `axgen-adapters` crate provides implementations.

use crate::error::AxgenResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `axgen_adapters::filesystem::LocalFilesystem` (production)
/// - `axgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - All paths are relative to the process working directory
/// - There is deliberately no `remove` operation: the scaffold use case
///   only ever creates, never deletes or overwrites
pub trait Filesystem: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> AxgenResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> AxgenResult<()>;

    /// Read a file's content as UTF-8.
    fn read_file(&self, path: &Path) -> AxgenResult<String>;

    /// List every directory under `root`, the root itself included, in a
    /// deterministic (sorted) order.
    fn dirs_under(&self, root: &Path) -> AxgenResult<Vec<PathBuf>>;
}
