//! Best-effort invocation of advisory external tools.
//!
//! Every advisory binary (Dockerfile linter, secret scanner, language syntax
//! checker) goes through this seam: availability is probed on the PATH before
//! spawning, and an absent tool is an outcome, never an error. Callers map
//! [`ToolOutcome::Unavailable`] to WARN per the gate policy.
//!
//! Invocations are assumed to be short-lived; no timeout is enforced.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

/// Outcome of trying to run an advisory tool.
#[derive(Debug, Clone)]
pub enum ToolOutcome {
    /// The tool ran to completion.
    Ran {
        /// Whether it exited with status zero.
        success: bool,
        /// Captured stdout and stderr, concatenated.
        output: String,
    },
    /// The tool binary could not be located.
    Unavailable,
}

/// Locates and invokes advisory tools.
///
/// Holds the PATH it probes against so tests can pin it (an empty PATH makes
/// every tool unavailable).
#[derive(Debug, Clone)]
pub struct ToolAdapter {
    path: OsString,
}

impl ToolAdapter {
    /// Adapter probing the process environment's PATH.
    pub fn from_env() -> Self {
        Self {
            path: std::env::var_os("PATH").unwrap_or_default(),
        }
    }

    /// Adapter probing a fixed PATH value.
    pub fn with_path(path: impl Into<OsString>) -> Self {
        Self { path: path.into() }
    }

    /// Whether `tool` can be located on the probed PATH.
    pub fn is_available(&self, tool: &str) -> bool {
        self.locate(tool).is_some()
    }

    /// Run `tool` with `args`, or report it unavailable.
    ///
    /// A located tool that fails to spawn or exits non-zero is still a
    /// [`ToolOutcome::Ran`] with `success: false`; the caller decides the
    /// severity, which is capped at WARN for advisory tools.
    pub fn try_run(&self, tool: &str, args: &[&str]) -> ToolOutcome {
        let Some(binary) = self.locate(tool) else {
            debug!(tool, "not found on PATH");
            return ToolOutcome::Unavailable;
        };

        match Command::new(&binary).args(args).output() {
            Ok(output) => {
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));
                ToolOutcome::Ran {
                    success: output.status.success(),
                    output: text,
                }
            }
            Err(e) => {
                debug!(tool, error = %e, "spawn failed");
                ToolOutcome::Ran {
                    success: false,
                    output: e.to_string(),
                }
            }
        }
    }

    /// Search the probed PATH for an executable entry named `tool`.
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        std::env::split_paths(&self.path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(tool))
            .find(|candidate| is_executable(candidate))
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
