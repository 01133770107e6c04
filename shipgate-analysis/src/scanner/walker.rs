//! Single-pass project walker.
//!
//! Walks the tree sequentially, classifies each file, and reads the contents
//! the checks need. Per-file IO errors degrade to skipped files; only an
//! unreadable root aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use shipgate_core::config::GateConfig;
use shipgate_core::errors::RunError;

use super::ignores::IgnorePatterns;
use super::types::{FileKind, ProjectTree, ScanStats, SourceFile};

impl ProjectTree {
    /// Walk `root` and build the file inventory for a gate run.
    ///
    /// Returns [`RunError::RootUnreadable`] when `root` is not a readable
    /// directory; everything below that degrades to skipped files.
    pub fn scan(root: &Path, config: &GateConfig) -> Result<Self, RunError> {
        if fs::read_dir(root).is_err() {
            return Err(RunError::RootUnreadable {
                path: root.to_path_buf(),
            });
        }

        let dockerfile_rel = PathBuf::from(config.effective_dockerfile());
        let manifests_rel = PathBuf::from(config.effective_manifests_dir());
        let ignores = IgnorePatterns::new(root, &config.extra_ignores);

        let mut tree = ProjectTree {
            root: root.to_path_buf(),
            dockerfile: None,
            manifests_dir_exists: root.join(&manifests_rel).is_dir(),
            manifests: Vec::new(),
            php_files: Vec::new(),
            yaml_files: Vec::new(),
            scan_files: Vec::new(),
            stats: ScanStats::default(),
        };

        let mut paths = Vec::new();
        collect_files(root, root, &ignores, &mut paths);

        for path in paths {
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            let kind = FileKind::of(&relative, &dockerfile_rel, &manifests_rel);
            if kind == FileKind::Other {
                continue;
            }

            tree.stats.total_files += 1;

            // PHP syntax checking shells out per file; no content needed.
            if kind == FileKind::Php {
                tree.php_files.push(path);
                continue;
            }

            let content = match read_bounded(&path, config.effective_max_file_size()) {
                Some(content) => content,
                None => {
                    tree.stats.files_skipped += 1;
                    continue;
                }
            };
            let file = SourceFile {
                path: relative,
                content,
            };

            match kind {
                FileKind::Dockerfile => tree.dockerfile = Some(file),
                FileKind::Manifest => {
                    tree.scan_files.push(file.clone());
                    tree.yaml_files.push(file.clone());
                    tree.manifests.push(file);
                }
                FileKind::Yaml => {
                    tree.scan_files.push(file.clone());
                    tree.yaml_files.push(file);
                }
                FileKind::Script | FileKind::Config => tree.scan_files.push(file),
                // Php and Other were diverted above.
                _ => {}
            }
        }

        debug!(
            total = tree.stats.total_files,
            skipped = tree.stats.files_skipped,
            manifests = tree.manifests.len(),
            "scan complete"
        );
        Ok(tree)
    }
}

/// Recursively collect candidate file paths, respecting ignore rules.
fn collect_files(root: &Path, dir: &Path, ignores: &IgnorePatterns, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "cannot read directory, skipping");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(&path);

        if path.is_dir() {
            if !ignores.is_ignored(relative, true) {
                collect_files(root, &path, ignores, out);
            }
        } else if path.is_file() && !ignores.is_ignored(relative, false) {
            out.push(path);
        }
    }
}

/// Read a file as lossy UTF-8, or None when it is too large or unreadable.
fn read_bounded(path: &Path, max_size: u64) -> Option<String> {
    let metadata = fs::metadata(path).ok()?;
    if metadata.len() > max_size {
        debug!(path = %path.display(), size = metadata.len(), "file exceeds size cap, skipping");
        return None;
    }
    let bytes = fs::read(path).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}
