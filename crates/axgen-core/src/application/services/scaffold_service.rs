//! Scaffold Service - main application orchestrator.
//!
//! This service applies a [`Blueprint`] to the filesystem:
//! 1. Validate the blueprint
//! 2. Create the root directory
//! 3. Create every listed directory
//! 4. Drop a package marker into every directory of the tree
//! 5. Write every placeholder file
//!
//! Each step is guarded by an existence check and never overwrites anything
//! already present, so the whole sequence is idempotent: applying the same
//! blueprint twice leaves the filesystem exactly as after the first apply.
//!
//! Errors are fatal and unrecovered. There is no retry and no rollback; a
//! failed apply leaves the partially-created tree on disk.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::Blueprint,
    error::AxgenResult,
};

/// What one apply actually did.
///
/// Paths are as written: the blueprint root joined with each relative entry.
/// `skipped` counts entries that already existed and were left untouched.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ScaffoldReport {
    pub created_directories: Vec<PathBuf>,
    pub created_markers: Vec<PathBuf>,
    pub created_files: Vec<PathBuf>,
    pub skipped: usize,
    /// Existing files whose content differs from the expected placeholder.
    /// They are reported, never modified.
    pub mismatched: Vec<PathBuf>,
}

impl ScaffoldReport {
    pub fn created_count(&self) -> usize {
        self.created_directories.len() + self.created_markers.len() + self.created_files.len()
    }

    /// `true` if the apply found everything already in place.
    pub fn is_noop(&self) -> bool {
        self.created_count() == 0
    }
}

/// Main scaffolding service.
///
/// Owns the filesystem port; the blueprint is passed per call.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Apply a blueprint to the filesystem.
    ///
    /// This is the single use case of the tool. The step order matters: the
    /// marker walk must run after the directory pass so every target
    /// directory exists to be walked, and files are written last so their
    /// parent directories are guaranteed present.
    #[instrument(skip_all, fields(root = %blueprint.root().display()))]
    pub fn apply(&self, blueprint: &Blueprint) -> AxgenResult<ScaffoldReport> {
        blueprint.validate()?;

        let mut report = ScaffoldReport::default();
        let root = blueprint.root();

        // 1. Root directory.
        if self.filesystem.exists(root) {
            report.skipped += 1;
        } else {
            self.filesystem.create_dir_all(root)?;
            info!(path = %root.display(), "Created root directory");
            report.created_directories.push(root.to_path_buf());
        }

        // 2. Listed directories, in blueprint order.
        for dir in blueprint.directories() {
            let path = root.join(dir);
            if self.filesystem.exists(&path) {
                report.skipped += 1;
                continue;
            }
            self.filesystem.create_dir_all(&path)?;
            info!(path = %path.display(), "Created directory");
            report.created_directories.push(path);
        }

        // 3. Package markers, for every directory of the tree.
        for dir in self.filesystem.dirs_under(root)? {
            if blueprint.is_cache_artifact(&dir) {
                continue;
            }
            let marker = dir.join(blueprint.package_marker());
            if self.filesystem.exists(&marker) {
                report.skipped += 1;
                continue;
            }
            self.filesystem.write_file(&marker, "")?;
            info!(path = %marker.display(), "Created package marker");
            report.created_markers.push(marker);
        }

        // 4. Placeholder files, in blueprint order.
        for file in blueprint.files() {
            let path = root.join(file.path());
            let expected = file.placeholder(blueprint.comment_prefix());

            if self.filesystem.exists(&path) {
                report.skipped += 1;
                if self.filesystem.read_file(&path)? != expected {
                    warn!(
                        path = %path.display(),
                        "Existing file differs from placeholder, leaving untouched"
                    );
                    report.mismatched.push(path);
                }
                continue;
            }

            self.filesystem.write_file(&path, &expected)?;
            info!(path = %path.display(), "Created file");
            report.created_files.push(path);
        }

        info!(
            created = report.created_count(),
            skipped = report.skipped,
            "Scaffold apply completed"
        );
        Ok(report)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
