//! Core types for the check battery.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scanner::ProjectTree;
use crate::tools::ToolAdapter;

/// The check catalog identifiers, in battery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckId {
    DockerfilePresence,
    DockerfileRootUser,
    DockerfileTagPinning,
    DockerfileSecretLiterals,
    DockerfileLint,
    ManifestsPresence,
    ManifestPasswords,
    ManifestPrivileged,
    ManifestResourceLimits,
    ManifestSecurityContext,
    SecretPatterns,
    SecretScanner,
    PhpSyntax,
    YamlSyntax,
    DockerfileMinimalBase,
    ManifestDbImagePinning,
    ManifestSecretExternalization,
    ManifestSecretReferences,
    ManifestConfigReferences,
}

impl CheckId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DockerfilePresence => "dockerfile-presence",
            Self::DockerfileRootUser => "dockerfile-root-user",
            Self::DockerfileTagPinning => "dockerfile-tag-pinning",
            Self::DockerfileSecretLiterals => "dockerfile-secret-literals",
            Self::DockerfileLint => "dockerfile-lint",
            Self::ManifestsPresence => "manifests-presence",
            Self::ManifestPasswords => "manifest-passwords",
            Self::ManifestPrivileged => "manifest-privileged",
            Self::ManifestResourceLimits => "manifest-resource-limits",
            Self::ManifestSecurityContext => "manifest-security-context",
            Self::SecretPatterns => "secret-patterns",
            Self::SecretScanner => "secret-scanner",
            Self::PhpSyntax => "php-syntax",
            Self::YamlSyntax => "yaml-syntax",
            Self::DockerfileMinimalBase => "dockerfile-minimal-base",
            Self::ManifestDbImagePinning => "manifest-db-image-pinning",
            Self::ManifestSecretExternalization => "manifest-secret-externalization",
            Self::ManifestSecretReferences => "manifest-secret-references",
            Self::ManifestConfigReferences => "manifest-config-references",
        }
    }

    /// The full catalog, in the fixed battery order.
    pub fn all() -> &'static [CheckId] {
        &[
            Self::DockerfilePresence,
            Self::DockerfileRootUser,
            Self::DockerfileTagPinning,
            Self::DockerfileSecretLiterals,
            Self::DockerfileLint,
            Self::ManifestsPresence,
            Self::ManifestPasswords,
            Self::ManifestPrivileged,
            Self::ManifestResourceLimits,
            Self::ManifestSecurityContext,
            Self::SecretPatterns,
            Self::SecretScanner,
            Self::PhpSyntax,
            Self::YamlSyntax,
            Self::DockerfileMinimalBase,
            Self::ManifestDbImagePinning,
            Self::ManifestSecretExternalization,
            Self::ManifestSecretReferences,
            Self::ManifestConfigReferences,
        ]
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified outcome of one check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// One classified outcome produced by a check. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub check_id: CheckId,
    pub status: CheckStatus,
    pub message: String,
}

impl CheckResult {
    /// Create a passing result.
    pub fn pass(check_id: CheckId, message: impl Into<String>) -> Self {
        Self {
            check_id,
            status: CheckStatus::Pass,
            message: message.into(),
        }
    }

    /// Create a warning result.
    pub fn warn(check_id: CheckId, message: impl Into<String>) -> Self {
        Self {
            check_id,
            status: CheckStatus::Warn,
            message: message.into(),
        }
    }

    /// Create a failing result.
    pub fn fail(check_id: CheckId, message: impl Into<String>) -> Self {
        Self {
            check_id,
            status: CheckStatus::Fail,
            message: message.into(),
        }
    }

    /// Create a result at the given status.
    pub fn at(status: CheckStatus, check_id: CheckId, message: impl Into<String>) -> Self {
        Self {
            check_id,
            status,
            message: message.into(),
        }
    }
}

/// Input provided to each check by the runner.
pub struct CheckContext<'a> {
    /// The scanned file inventory.
    pub tree: &'a ProjectTree,
    /// Adapter for advisory external tools.
    pub tools: &'a ToolAdapter,
}

/// Trait for check implementations.
///
/// A check is a named predicate over the project tree. It may emit several
/// results (one per sub-rule or per offending file) or none at all; it must
/// never panic for conditions internal to the project tree, and it never
/// retries.
pub trait Check {
    fn id(&self) -> CheckId;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult>;
}
