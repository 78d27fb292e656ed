use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// Declarative description of a project skeleton.
///
/// This is the static input of the scaffolding process: an ordered list of
/// directories plus an ordered table of placeholder files. It contains no
/// business logic beyond its own validation, and no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    root: PathBuf,
    directories: Vec<PathBuf>,
    files: Vec<FileSpec>,
    package_marker: String,
    comment_prefix: String,
    cache_dir: String,
}

impl Blueprint {
    /// Create an empty blueprint rooted at `root`.
    ///
    /// Defaults target a Python package layout: `__init__.py` markers, `#`
    /// comment prefix, and `__pycache__` excluded from the marker walk.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: Vec::new(),
            files: Vec::new(),
            package_marker: "__init__.py".into(),
            comment_prefix: "#".into(),
            cache_dir: "__pycache__".into(),
        }
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directories.push(path.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, summary: impl Into<String>) -> Self {
        self.files.push(FileSpec {
            path: path.into(),
            summary: summary.into(),
        });
        self
    }

    pub fn with_package_marker(mut self, name: impl Into<String>) -> Self {
        self.package_marker = name.into();
        self
    }

    pub fn with_comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Check the blueprint invariants.
    ///
    /// Rejects empty blueprints, duplicate paths, absolute paths, and files
    /// whose parent directory would not exist after the directory pass. The
    /// last check turns a path-table typo into a domain error instead of a
    /// mid-apply filesystem failure.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::InvalidBlueprint("Blueprint is empty".into()));
        }

        let mut seen = HashSet::new();
        for path in self
            .directories
            .iter()
            .chain(self.files.iter().map(|f| &f.path))
        {
            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        let covered = self.covered_directories();
        for file in &self.files {
            match file.path.parent() {
                // Root-level file (e.g. `.env`, `requirements.txt`).
                None => {}
                Some(parent) if parent.as_os_str().is_empty() => {}
                Some(parent) if covered.contains(parent) => {}
                Some(parent) => {
                    return Err(DomainError::MissingParentDirectory {
                        path: file.path.display().to_string(),
                        parent: parent.display().to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Every directory the directory pass guarantees to exist: each listed
    /// directory plus its intermediate segments (`api/routers` covers `api`).
    fn covered_directories(&self) -> HashSet<PathBuf> {
        let mut covered = HashSet::new();
        for dir in &self.directories {
            let mut current = PathBuf::new();
            for component in dir.components() {
                current.push(component);
                covered.insert(current.clone());
            }
        }
        covered
    }

    /// `true` if `path` contains a cache-artifact component and must be
    /// skipped by the package-marker walk.
    pub fn is_cache_artifact(&self, path: &Path) -> bool {
        path.components()
            .any(|c| c.as_os_str() == self.cache_dir.as_str())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.directories.iter()
    }

    pub fn files(&self) -> impl Iterator<Item = &FileSpec> {
        self.files.iter()
    }

    pub fn package_marker(&self) -> &str {
        &self.package_marker
    }

    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }
}

/// A placeholder file: a relative path and a one-line summary of what the
/// file will eventually contain.
#[derive(Debug, Clone, PartialEq)]
pub struct FileSpec {
    pub(crate) path: PathBuf,
    pub(crate) summary: String,
}

impl FileSpec {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Render the placeholder body: one comment line plus trailing newline.
    pub fn placeholder(&self, comment_prefix: &str) -> String {
        format!("{} {}\n", comment_prefix, self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> Blueprint {
        Blueprint::new("proj")
            .with_directory("api/routers")
            .with_file("api/main.py", "entry point")
    }

    #[test]
    fn builder_accumulates_entries() {
        let bp = minimal();
        assert_eq!(bp.entry_count(), 2);
        assert_eq!(bp.directories().count(), 1);
        assert_eq!(bp.files().count(), 1);
    }

    #[test]
    fn empty_blueprint_is_invalid() {
        let bp = Blueprint::new("proj");
        assert!(matches!(
            bp.validate(),
            Err(DomainError::InvalidBlueprint(_))
        ));
    }

    #[test]
    fn duplicate_paths_rejected() {
        let bp = Blueprint::new("proj")
            .with_file("main.py", "one")
            .with_file("main.py", "two");
        assert!(matches!(bp.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn absolute_paths_rejected() {
        let bp = Blueprint::new("proj").with_directory("/etc/api");
        assert!(matches!(
            bp.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn root_level_file_needs_no_parent() {
        let bp = Blueprint::new("proj")
            .with_directory("core")
            .with_file(".env", "environment template");
        assert!(bp.validate().is_ok());
    }

    #[test]
    fn intermediate_segment_counts_as_covered() {
        // `api` is never listed, but `api/routers` guarantees it.
        let bp = Blueprint::new("proj")
            .with_directory("api/routers")
            .with_file("api/dependencies.py", "reusable dependencies");
        assert!(bp.validate().is_ok());
    }

    #[test]
    fn orphan_file_parent_is_rejected() {
        let bp = Blueprint::new("proj")
            .with_directory("core")
            .with_file("servces/ai.py", "typo in directory name");
        match bp.validate() {
            Err(DomainError::MissingParentDirectory { parent, .. }) => {
                assert_eq!(parent, "servces");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn placeholder_is_one_commented_line() {
        let bp = minimal();
        let file = bp.files().next().unwrap();
        assert_eq!(file.placeholder(bp.comment_prefix()), "# entry point\n");
    }

    #[test]
    fn cache_artifact_detection() {
        let bp = minimal();
        assert!(bp.is_cache_artifact(Path::new("proj/__pycache__")));
        assert!(bp.is_cache_artifact(Path::new("proj/__pycache__/deep")));
        assert!(!bp.is_cache_artifact(Path::new("proj/api/routers")));
    }

    #[test]
    fn custom_marker_and_prefix() {
        let bp = Blueprint::new("proj")
            .with_package_marker("index.js")
            .with_comment_prefix("//")
            .with_file("app.js", "express app");
        assert_eq!(bp.package_marker(), "index.js");
        let file = bp.files().next().unwrap();
        assert_eq!(file.placeholder(bp.comment_prefix()), "// express app\n");
    }
}
