//! Shared constants for the shipgate quality gate.

/// shipgate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum file size in bytes read during a scan (default: 1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_048_576;

/// Default container build descriptor path, relative to the project root.
pub const DEFAULT_DOCKERFILE_PATH: &str = "Dockerfile";

/// Default orchestration manifests directory, relative to the project root.
pub const DEFAULT_MANIFESTS_DIR: &str = "k8s";

/// Config file name looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "shipgate.toml";

/// Directories never descended into during a scan. Hidden directories
/// (leading dot) are skipped independently of this list.
pub const SKIPPED_DIRS: &[&str] = &["node_modules", "vendor", "target", "dist", "build"];
