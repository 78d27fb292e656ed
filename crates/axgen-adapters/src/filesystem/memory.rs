//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use axgen_core::application::ports::Filesystem;
use axgen_core::application::ApplicationError;
use axgen_core::error::AxgenResult;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// List all files (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Snapshot of every file path with its content (testing helper).
    pub fn snapshot(&self) -> Vec<(PathBuf, String)> {
        let inner = self.inner.read().unwrap();
        let mut entries: Vec<_> = inner
            .files
            .iter()
            .map(|(p, c)| (p.clone(), c.clone()))
            .collect();
        entries.sort();
        entries
    }

    /// Remove a directory and everything below it (testing helper; the
    /// `Filesystem` port itself has no delete operation).
    pub fn remove_dir_all(&self, path: &Path) {
        let mut inner = self.inner.write().unwrap();
        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn create_dir_all(&self, path: &Path) -> AxgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> AxgenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::AdapterLockError)?;

        // Mirror the real filesystem: writing into a missing parent fails.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_file(&self, path: &Path) -> AxgenResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::AdapterLockError)?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File does not exist".into(),
            }
            .into()
        })
    }

    fn dirs_under(&self, root: &Path) -> AxgenResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::AdapterLockError)?;

        let mut dirs: Vec<_> = inner
            .directories
            .iter()
            .filter(|d| d.starts_with(root))
            .cloned()
            .collect();
        dirs.sort();
        Ok(dirs)
    }
}
