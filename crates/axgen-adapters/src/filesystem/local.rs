//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use axgen_core::{application::ports::Filesystem, error::AxgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> AxgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> AxgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> AxgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn dirs_under(&self, root: &Path) -> AxgenResult<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let io_err = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("walk aborted"));
                map_io_error(&path, io_err, "walk directory")
            })?;
            if entry.file_type().is_dir() {
                dirs.push(entry.into_path());
            }
        }
        dirs.sort();
        Ok(dirs)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> axgen_core::error::AxgenError {
    use axgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
