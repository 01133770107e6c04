//! The check battery — independent predicates over the project tree.

pub mod dockerfile;
pub mod manifests;
pub mod policy;
pub mod secrets;
pub mod syntax;
pub mod types;

pub use types::{Check, CheckContext, CheckId, CheckResult, CheckStatus};

use dockerfile::{
    DockerfileLintCheck, DockerfileMinimalBaseCheck, DockerfilePresenceCheck,
    DockerfileRootUserCheck, DockerfileSecretLiteralsCheck, DockerfileTagPinningCheck,
};
use manifests::{
    ManifestConfigReferencesCheck, ManifestDbImagePinningCheck, ManifestPasswordsCheck,
    ManifestPrivilegedCheck, ManifestResourceLimitsCheck, ManifestSecretExternalizationCheck,
    ManifestSecretReferencesCheck, ManifestSecurityContextCheck, ManifestsPresenceCheck,
};
use secrets::{SecretPatternsCheck, SecretScannerCheck};
use syntax::{PhpSyntaxCheck, YamlSyntaxCheck};

/// The full check battery, in the fixed order of [`CheckId::all`].
pub fn catalog() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(DockerfilePresenceCheck),
        Box::new(DockerfileRootUserCheck),
        Box::new(DockerfileTagPinningCheck),
        Box::new(DockerfileSecretLiteralsCheck),
        Box::new(DockerfileLintCheck),
        Box::new(ManifestsPresenceCheck),
        Box::new(ManifestPasswordsCheck),
        Box::new(ManifestPrivilegedCheck),
        Box::new(ManifestResourceLimitsCheck),
        Box::new(ManifestSecurityContextCheck),
        Box::new(SecretPatternsCheck),
        Box::new(SecretScannerCheck),
        Box::new(PhpSyntaxCheck),
        Box::new(YamlSyntaxCheck),
        Box::new(DockerfileMinimalBaseCheck),
        Box::new(ManifestDbImagePinningCheck),
        Box::new(ManifestSecretExternalizationCheck),
        Box::new(ManifestSecretReferencesCheck),
        Box::new(ManifestConfigReferencesCheck),
    ]
}
