//! Orchestration manifest checks.
//!
//! Content rules operate on the manifest files inventoried by the scanner;
//! when the manifests directory is missing only the presence check reports
//! (FAIL) and the content rules emit nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::scanner::SourceFile;

use super::policy::severity_on_violation;
use super::types::{Check, CheckContext, CheckId, CheckResult};

static PASSWORD_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*password\s*:[ \t]*\S+").expect("invalid regex"));

static PRIVILEGED_TRUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*privileged\s*:[ \t]*true[ \t]*$").expect("invalid regex"));

static WORKLOAD_KIND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^kind:\s*(Deployment|StatefulSet|DaemonSet)\s*$").expect("invalid regex")
});

static IMAGE_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?im)^\s*(?:-\s+)?image:\s*["']?([^"'\s]+)"#).expect("invalid regex"));

/// Image name fragments treated as datastores.
const DATASTORE_IMAGES: &[&str] = &["mysql", "mariadb", "postgres", "mongo", "redis"];

/// Manifest files declaring a workload (deployment-kind) resource.
fn workload_manifests<'a>(manifests: &'a [SourceFile]) -> Vec<&'a SourceFile> {
    manifests
        .iter()
        .filter(|m| WORKLOAD_KIND.is_match(&m.content))
        .collect()
}

/// The manifests directory exists.
pub struct ManifestsPresenceCheck;

impl Check for ManifestsPresenceCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestsPresence
    }

    fn name(&self) -> &'static str {
        "Manifests presence"
    }

    fn description(&self) -> &'static str {
        "The orchestration manifests directory exists"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if ctx.tree.manifests_dir_exists {
            vec![CheckResult::pass(
                self.id(),
                format!("Manifests directory found ({} file(s))", ctx.tree.manifests.len()),
            )]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                "Manifests directory not found",
            )]
        }
    }
}

/// No manifest hardcodes a password value.
pub struct ManifestPasswordsCheck;

impl Check for ManifestPasswordsCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestPasswords
    }

    fn name(&self) -> &'static str {
        "Manifest passwords"
    }

    fn description(&self) -> &'static str {
        "No manifest contains a hardcoded password literal"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if !ctx.tree.manifests_dir_exists {
            return Vec::new();
        }
        let offenders: Vec<String> = ctx
            .tree
            .manifests
            .iter()
            .filter(|m| PASSWORD_LITERAL.is_match(&m.content))
            .map(|m| m.path.display().to_string())
            .collect();

        if offenders.is_empty() {
            vec![CheckResult::pass(
                self.id(),
                "No hardcoded passwords in manifests",
            )]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                format!("Hardcoded password literal in: {}", offenders.join(", ")),
            )]
        }
    }
}

/// No manifest requests privileged execution.
pub struct ManifestPrivilegedCheck;

impl Check for ManifestPrivilegedCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestPrivileged
    }

    fn name(&self) -> &'static str {
        "Manifest privileged containers"
    }

    fn description(&self) -> &'static str {
        "No manifest sets the privileged-execution flag"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if !ctx.tree.manifests_dir_exists {
            return Vec::new();
        }
        let offenders: Vec<String> = ctx
            .tree
            .manifests
            .iter()
            .filter(|m| PRIVILEGED_TRUE.is_match(&m.content))
            .map(|m| m.path.display().to_string())
            .collect();

        if offenders.is_empty() {
            vec![CheckResult::pass(self.id(), "No privileged containers")]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                format!("Privileged container in: {}", offenders.join(", ")),
            )]
        }
    }
}

/// Every workload manifest declares resource limits.
pub struct ManifestResourceLimitsCheck;

impl Check for ManifestResourceLimitsCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestResourceLimits
    }

    fn name(&self) -> &'static str {
        "Manifest resource limits"
    }

    fn description(&self) -> &'static str {
        "Workload manifests declare resource limits"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if !ctx.tree.manifests_dir_exists {
            return Vec::new();
        }
        let workloads = workload_manifests(&ctx.tree.manifests);
        let missing = workloads
            .iter()
            .filter(|m| !m.content.contains("limits:"))
            .count();

        if missing == 0 {
            vec![CheckResult::pass(
                self.id(),
                "All workload manifests declare resource limits",
            )]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                format!("{missing} workload manifest(s) missing resource limits"),
            )]
        }
    }
}

/// Every workload manifest declares a security context.
pub struct ManifestSecurityContextCheck;

impl Check for ManifestSecurityContextCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestSecurityContext
    }

    fn name(&self) -> &'static str {
        "Manifest security context"
    }

    fn description(&self) -> &'static str {
        "Workload manifests declare a security context"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if !ctx.tree.manifests_dir_exists {
            return Vec::new();
        }
        let workloads = workload_manifests(&ctx.tree.manifests);
        let missing = workloads
            .iter()
            .filter(|m| !m.content.contains("securityContext"))
            .count();

        if missing == 0 {
            vec![CheckResult::pass(
                self.id(),
                "All workload manifests declare a security context",
            )]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                format!("{missing} workload manifest(s) missing a security context"),
            )]
        }
    }
}

/// Datastore images referenced by manifests pin a numeric version.
pub struct ManifestDbImagePinningCheck;

impl Check for ManifestDbImagePinningCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestDbImagePinning
    }

    fn name(&self) -> &'static str {
        "Datastore image pinning"
    }

    fn description(&self) -> &'static str {
        "Datastore images referenced by manifests pin a numeric version"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if !ctx.tree.manifests_dir_exists {
            return Vec::new();
        }

        let mut datastore_refs = Vec::new();
        for manifest in &ctx.tree.manifests {
            for capture in IMAGE_REF.captures_iter(&manifest.content) {
                let image = capture.get(1).expect("capture group").as_str();
                let name = image.split(':').next().unwrap_or(image);
                if DATASTORE_IMAGES.iter().any(|d| name.contains(d)) {
                    datastore_refs.push(image);
                }
            }
        }

        if datastore_refs.is_empty() {
            return vec![CheckResult::pass(
                self.id(),
                "No datastore images referenced",
            )];
        }

        let unpinned: Vec<&str> = datastore_refs
            .iter()
            .copied()
            .filter(|image| {
                !image
                    .split(':')
                    .nth(1)
                    .is_some_and(|tag| tag.starts_with(|c: char| c.is_ascii_digit()))
            })
            .collect();

        if unpinned.is_empty() {
            vec![CheckResult::pass(
                self.id(),
                "All datastore images pin a numeric version",
            )]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                format!("Unpinned datastore image: {}", unpinned.join(", ")),
            )]
        }
    }
}

/// Secrets live in dedicated secret-resource files.
pub struct ManifestSecretExternalizationCheck;

impl Check for ManifestSecretExternalizationCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestSecretExternalization
    }

    fn name(&self) -> &'static str {
        "Secret externalization"
    }

    fn description(&self) -> &'static str {
        "At least one manifest file follows the secret-resource naming convention"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if !ctx.tree.manifests_dir_exists {
            return Vec::new();
        }
        let found = ctx.tree.manifests.iter().any(|m| {
            m.path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.to_lowercase().contains("secret"))
        });

        if found {
            vec![CheckResult::pass(self.id(), "Secret resource file present")]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                "No secret resource file in manifests",
            )]
        }
    }
}

/// Manifests pull secret values through key references.
pub struct ManifestSecretReferencesCheck;

impl Check for ManifestSecretReferencesCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestSecretReferences
    }

    fn name(&self) -> &'static str {
        "Secret references"
    }

    fn description(&self) -> &'static str {
        "Manifests reference secret values via secretKeyRef"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if !ctx.tree.manifests_dir_exists {
            return Vec::new();
        }
        let found = ctx
            .tree
            .manifests
            .iter()
            .any(|m| m.content.contains("secretKeyRef"));

        if found {
            vec![CheckResult::pass(self.id(), "Manifests use secretKeyRef")]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                "No secretKeyRef usage in manifests",
            )]
        }
    }
}

/// Manifests pull non-secret configuration through key references.
pub struct ManifestConfigReferencesCheck;

impl Check for ManifestConfigReferencesCheck {
    fn id(&self) -> CheckId {
        CheckId::ManifestConfigReferences
    }

    fn name(&self) -> &'static str {
        "Config references"
    }

    fn description(&self) -> &'static str {
        "Manifests reference configuration via configMapKeyRef"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        if !ctx.tree.manifests_dir_exists {
            return Vec::new();
        }
        let found = ctx
            .tree
            .manifests
            .iter()
            .any(|m| m.content.contains("configMapKeyRef"));

        if found {
            vec![CheckResult::pass(self.id(), "Manifests use configMapKeyRef")]
        } else {
            vec![CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                "No configMapKeyRef usage in manifests",
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_literal_matches_values_only() {
        assert!(PASSWORD_LITERAL.is_match("password: hunter2"));
        assert!(PASSWORD_LITERAL.is_match("  PASSWORD: abc"));
        assert!(!PASSWORD_LITERAL.is_match("password:\n  valueFrom:"));
    }

    #[test]
    fn privileged_matches_exact_flag() {
        assert!(PRIVILEGED_TRUE.is_match("    privileged: true"));
        assert!(!PRIVILEGED_TRUE.is_match("privileged: false"));
    }

    #[test]
    fn workload_kind_matches_deployment_kinds() {
        assert!(WORKLOAD_KIND.is_match("kind: Deployment\n"));
        assert!(WORKLOAD_KIND.is_match("kind: StatefulSet\n"));
        assert!(!WORKLOAD_KIND.is_match("kind: Service\n"));
    }

    #[test]
    fn image_ref_captures_quoted_and_list_items() {
        let content = "  - image: \"mysql:8.0\"\n    image: redis\n";
        let images: Vec<&str> = IMAGE_REF
            .captures_iter(content)
            .map(|c| c.get(1).unwrap().as_str())
            .collect();
        assert_eq!(images, vec!["mysql:8.0", "redis"]);
    }
}
