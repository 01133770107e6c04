//! Gate run configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Configuration for a gate run, loaded from `shipgate.toml` at the project
/// root when present. Every field is optional; `effective_*` accessors apply
/// the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Container build descriptor path, relative to the project root.
    /// Default: "Dockerfile".
    pub dockerfile: Option<String>,
    /// Orchestration manifests directory, relative to the project root.
    /// Default: "k8s".
    pub manifests_dir: Option<String>,
    /// Extra directory names skipped during the scan, in addition to the
    /// built-in hidden/vendor set.
    #[serde(default)]
    pub extra_ignores: Vec<String>,
    /// Maximum file size in bytes read during the scan. Default: 1MB.
    pub max_file_size: Option<u64>,
}

impl GateConfig {
    /// Load the config from `shipgate.toml` under `root`, or defaults when
    /// the file does not exist.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(constants::CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&text).map_err(|e| ConfigError::Invalid {
            path,
            message: e.to_string(),
        })
    }

    /// Returns the effective dockerfile path, defaulting to "Dockerfile".
    pub fn effective_dockerfile(&self) -> &str {
        self.dockerfile
            .as_deref()
            .unwrap_or(constants::DEFAULT_DOCKERFILE_PATH)
    }

    /// Returns the effective manifests directory, defaulting to "k8s".
    pub fn effective_manifests_dir(&self) -> &str {
        self.manifests_dir
            .as_deref()
            .unwrap_or(constants::DEFAULT_MANIFESTS_DIR)
    }

    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size
            .unwrap_or(constants::DEFAULT_MAX_FILE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_fields_absent() {
        let config = GateConfig::default();
        assert_eq!(config.effective_dockerfile(), "Dockerfile");
        assert_eq!(config.effective_manifests_dir(), "k8s");
        assert_eq!(config.effective_max_file_size(), 1_048_576);
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config: GateConfig = toml::from_str("manifests_dir = \"deploy\"").unwrap();
        assert_eq!(config.effective_manifests_dir(), "deploy");
        assert_eq!(config.effective_dockerfile(), "Dockerfile");
    }
}
