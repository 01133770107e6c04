//! Severity policy — what a violated rule costs.
//!
//! The severity of every catalog rule lives in this one table so the policy
//! is data rather than branches scattered through the checks. Advisory-tool
//! rules are capped at [`CheckStatus::Warn`] here and nothing downstream may
//! escalate them.

use super::types::{CheckId, CheckStatus};

/// Severity emitted when the given check's rule is violated.
pub fn severity_on_violation(id: CheckId) -> CheckStatus {
    match id {
        // Structural requirements and content violations block the gate.
        CheckId::DockerfilePresence
        | CheckId::DockerfileSecretLiterals
        | CheckId::ManifestsPresence
        | CheckId::ManifestPasswords
        | CheckId::ManifestPrivileged
        | CheckId::PhpSyntax
        | CheckId::YamlSyntax => CheckStatus::Fail,

        // Advisory gaps and external-tool outcomes never block.
        CheckId::DockerfileRootUser
        | CheckId::DockerfileTagPinning
        | CheckId::DockerfileLint
        | CheckId::ManifestResourceLimits
        | CheckId::ManifestSecurityContext
        | CheckId::SecretPatterns
        | CheckId::SecretScanner
        | CheckId::DockerfileMinimalBase
        | CheckId::ManifestDbImagePinning
        | CheckId::ManifestSecretExternalization
        | CheckId::ManifestSecretReferences
        | CheckId::ManifestConfigReferences => CheckStatus::Warn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocking_rules_fail() {
        for id in [
            CheckId::DockerfilePresence,
            CheckId::DockerfileSecretLiterals,
            CheckId::ManifestsPresence,
            CheckId::ManifestPasswords,
            CheckId::ManifestPrivileged,
            CheckId::PhpSyntax,
            CheckId::YamlSyntax,
        ] {
            assert_eq!(severity_on_violation(id), CheckStatus::Fail, "{id}");
        }
    }

    #[test]
    fn advisory_rules_warn() {
        for id in [
            CheckId::DockerfileRootUser,
            CheckId::DockerfileTagPinning,
            CheckId::DockerfileLint,
            CheckId::SecretPatterns,
            CheckId::SecretScanner,
            CheckId::DockerfileMinimalBase,
        ] {
            assert_eq!(severity_on_violation(id), CheckStatus::Warn, "{id}");
        }
    }

    #[test]
    fn every_catalog_row_has_a_severity() {
        // Exhaustiveness is guaranteed by the match, but keep the catalog
        // and the table visibly in sync.
        for id in CheckId::all() {
            let _ = severity_on_violation(*id);
        }
    }
}
