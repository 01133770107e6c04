//! Container build descriptor checks.
//!
//! All content rules operate on the Dockerfile inventoried by the scanner;
//! when the descriptor is missing only the presence check reports (FAIL) and
//! the content rules emit nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use super::policy::severity_on_violation;
use super::types::{Check, CheckContext, CheckId, CheckResult};

static ROOT_USER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*USER\s+root\s*$").expect("invalid regex"));

static FROM_IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*FROM\s+(?:--\S+\s+)*(\S+)").expect("invalid regex"));

/// Substrings that must not appear in a build descriptor, matched
/// case-insensitively as plain substrings ("key" also hits e.g. "monkey").
const SECRET_LITERALS: &[&str] = &["password", "secret", "key", "token"];

/// Extract the tag from an image reference, when one is present.
/// A colon only counts as a tag separator after the last path segment, so
/// `registry:5000/app` has no tag while `registry:5000/app:1.2` does.
fn image_tag(image: &str) -> Option<&str> {
    let colon = image.rfind(':')?;
    let slash = image.rfind('/').unwrap_or(0);
    if colon > slash {
        Some(&image[colon + 1..])
    } else {
        None
    }
}

/// Base image references in the descriptor, in order.
fn base_images(content: &str) -> Vec<&str> {
    FROM_IMAGE
        .captures_iter(content)
        .map(|c| c.get(1).expect("capture group").as_str())
        .collect()
}

/// The container build descriptor exists at its configured path.
pub struct DockerfilePresenceCheck;

impl Check for DockerfilePresenceCheck {
    fn id(&self) -> CheckId {
        CheckId::DockerfilePresence
    }

    fn name(&self) -> &'static str {
        "Dockerfile presence"
    }

    fn description(&self) -> &'static str {
        "The container build descriptor exists at its configured path"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        match &ctx.tree.dockerfile {
            Some(file) => vec![CheckResult::pass(
                self.id(),
                format!("Dockerfile found at {}", file.path.display()),
            )],
            None => vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                "Dockerfile not found",
            )],
        }
    }
}

/// The descriptor does not switch to the root execution user.
pub struct DockerfileRootUserCheck;

impl Check for DockerfileRootUserCheck {
    fn id(&self) -> CheckId {
        CheckId::DockerfileRootUser
    }

    fn name(&self) -> &'static str {
        "Dockerfile root user"
    }

    fn description(&self) -> &'static str {
        "The descriptor does not explicitly switch to the root user"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        let Some(file) = &ctx.tree.dockerfile else {
            return Vec::new();
        };
        if ROOT_USER.is_match(&file.content) {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                "Dockerfile switches to the root user",
            )]
        } else {
            vec![CheckResult::pass(
                self.id(),
                "Dockerfile does not switch to the root user",
            )]
        }
    }
}

/// Every base image reference pins an explicit, non-latest tag.
pub struct DockerfileTagPinningCheck;

impl Check for DockerfileTagPinningCheck {
    fn id(&self) -> CheckId {
        CheckId::DockerfileTagPinning
    }

    fn name(&self) -> &'static str {
        "Dockerfile tag pinning"
    }

    fn description(&self) -> &'static str {
        "Base image references pin an explicit, non-latest version tag"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        let Some(file) = &ctx.tree.dockerfile else {
            return Vec::new();
        };
        let images = base_images(&file.content);
        if images.is_empty() {
            return vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                "Dockerfile has no FROM instruction",
            )];
        }

        let unpinned: Vec<&str> = images
            .iter()
            .copied()
            .filter(|image| matches!(image_tag(image), None | Some("latest")))
            .collect();

        if unpinned.is_empty() {
            vec![CheckResult::pass(
                self.id(),
                "All base images pin a version tag",
            )]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                format!("Unpinned base image: {}", unpinned.join(", ")),
            )]
        }
    }
}

/// The descriptor text contains no secret-like literals.
pub struct DockerfileSecretLiteralsCheck;

impl Check for DockerfileSecretLiteralsCheck {
    fn id(&self) -> CheckId {
        CheckId::DockerfileSecretLiterals
    }

    fn name(&self) -> &'static str {
        "Dockerfile secret literals"
    }

    fn description(&self) -> &'static str {
        "The descriptor contains no password/secret/key/token literals"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        let Some(file) = &ctx.tree.dockerfile else {
            return Vec::new();
        };
        let haystack = file.content.to_lowercase();
        let found: Vec<&str> = SECRET_LITERALS
            .iter()
            .copied()
            .filter(|literal| haystack.contains(literal))
            .collect();

        if found.is_empty() {
            vec![CheckResult::pass(
                self.id(),
                "No secret-like literals in Dockerfile",
            )]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                format!("Secret-like literals in Dockerfile: {}", found.join(", ")),
            )]
        }
    }
}

/// Advisory Dockerfile lint via hadolint, when installed.
pub struct DockerfileLintCheck;

impl Check for DockerfileLintCheck {
    fn id(&self) -> CheckId {
        CheckId::DockerfileLint
    }

    fn name(&self) -> &'static str {
        "Dockerfile lint"
    }

    fn description(&self) -> &'static str {
        "Runs hadolint against the descriptor when the linter is installed"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        use crate::tools::ToolOutcome;

        let Some(file) = &ctx.tree.dockerfile else {
            return Vec::new();
        };
        let path = ctx.tree.root.join(&file.path);
        let path_str = path.to_string_lossy();
        match ctx.tools.try_run("hadolint", &[path_str.as_ref()]) {
            ToolOutcome::Unavailable => vec![CheckResult::warn(
                self.id(),
                "hadolint not installed, lint skipped",
            )],
            ToolOutcome::Ran { success: true, .. } => {
                vec![CheckResult::pass(self.id(), "hadolint reported no issues")]
            }
            ToolOutcome::Ran { success: false, output } => {
                let issues = output.lines().filter(|l| !l.trim().is_empty()).count();
                vec![CheckResult::warn(
                    self.id(),
                    format!("hadolint reported {issues} issue(s)"),
                )]
            }
        }
    }
}

/// The base image uses a minimal variant (alpine/slim).
pub struct DockerfileMinimalBaseCheck;

impl Check for DockerfileMinimalBaseCheck {
    fn id(&self) -> CheckId {
        CheckId::DockerfileMinimalBase
    }

    fn name(&self) -> &'static str {
        "Dockerfile minimal base"
    }

    fn description(&self) -> &'static str {
        "The base image tag follows a minimal-variant naming convention"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        let Some(file) = &ctx.tree.dockerfile else {
            return Vec::new();
        };
        let images = base_images(&file.content);
        let minimal = images
            .iter()
            .any(|image| image.contains("alpine") || image.contains("slim"));

        if minimal {
            vec![CheckResult::pass(self.id(), "Base image is a minimal variant")]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                "Base image is not a minimal variant (alpine/slim)",
            )]
        }
    }
}
