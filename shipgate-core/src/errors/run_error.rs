//! Gate run errors.
//!
//! These are operational errors, distinct from a FAILURE verdict: they mean
//! the run could not be carried out at all, not that a check failed.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};
use super::{ConfigError, ScanError};

/// Errors that abort a gate run before or during setup.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Project root is not a readable directory: {path}")]
    RootUnreadable { path: PathBuf },

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ErrorCode for RunError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootUnreadable { .. } => error_code::ROOT_UNREADABLE,
            Self::Scan(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
