//! Scanner types - file inventory consumed by the check battery.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Classification of a scanned file, derived from its path and extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// The container build descriptor.
    Dockerfile,
    /// A YAML document under the manifests directory.
    Manifest,
    /// A PHP source file.
    Php,
    /// A YAML document outside the manifests directory.
    Yaml,
    /// A shell script.
    Script,
    /// Other configuration text (.env, .conf, .ini, .toml, .properties).
    Config,
    /// Anything else.
    Other,
}

impl FileKind {
    /// Classify a file by its relative path.
    pub fn of(relative: &Path, dockerfile: &Path, manifests_dir: &Path) -> Self {
        if relative == dockerfile {
            return Self::Dockerfile;
        }
        let ext = relative
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => {
                if relative.starts_with(manifests_dir) {
                    Self::Manifest
                } else {
                    Self::Yaml
                }
            }
            Some("php") | Some("phtml") => Self::Php,
            Some("sh") | Some("bash") => Self::Script,
            Some("env") | Some("conf") | Some("ini") | Some("toml") | Some("properties") => {
                Self::Config
            }
            _ => Self::Other,
        }
    }
}

/// A scanned text file: project-relative path plus content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Relative path from the project root.
    pub path: PathBuf,
    /// File content, lossily decoded as UTF-8.
    pub content: String,
}

/// Statistics about a scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total files inventoried.
    pub total_files: usize,
    /// Files skipped (too large, unreadable).
    pub files_skipped: usize,
}

/// The file inventory for one gate run.
///
/// Built once by [`ProjectTree::scan`]; every check reads from this instead
/// of re-walking the filesystem.
#[derive(Debug)]
pub struct ProjectTree {
    /// Absolute project root.
    pub root: PathBuf,
    /// The container build descriptor, when present.
    pub dockerfile: Option<SourceFile>,
    /// Whether the manifests directory exists at all.
    pub manifests_dir_exists: bool,
    /// YAML documents under the manifests directory.
    pub manifests: Vec<SourceFile>,
    /// PHP sources, as absolute paths (syntax checking shells out per file).
    pub php_files: Vec<PathBuf>,
    /// Every YAML document in the tree, manifests included.
    pub yaml_files: Vec<SourceFile>,
    /// Script and configuration sources for the credential-pattern scan.
    pub scan_files: Vec<SourceFile>,
    /// Scan statistics.
    pub stats: ScanStats,
}
