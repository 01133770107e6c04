//! Repo-wide credential-pattern scan.
//!
//! Regex patterns identify credential-shaped assignments in script and
//! configuration sources. The ≥40-character base64-like rule is a blunt
//! heuristic with known false positives (long hashes, minified assets);
//! there is no allow-list or suppression mechanism.

use once_cell::sync::Lazy;
use regex::Regex;

use super::policy::severity_on_violation;
use super::types::{Check, CheckContext, CheckId, CheckResult};

/// Maximum offending files named in a single result message.
const MAX_LISTED_FILES: usize = 3;

struct CredentialPattern {
    name: &'static str,
    regex: Regex,
}

impl CredentialPattern {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            regex: Regex::new(pattern).expect("invalid regex"),
        }
    }
}

static CREDENTIAL_PATTERNS: Lazy<Vec<CredentialPattern>> = Lazy::new(|| {
    vec![
        CredentialPattern::new("password assignment", r"(?i)password\s*="),
        CredentialPattern::new("secret assignment", r"(?i)secret\s*="),
        CredentialPattern::new("api key assignment", r"(?i)api[_-]?key\s*="),
        CredentialPattern::new("token assignment", r"(?i)token\s*="),
        CredentialPattern::new("auth assignment", r"(?i)auth\s*="),
        CredentialPattern::new("base64-like token", r"[A-Za-z0-9+/=]{40,}"),
    ]
});

/// Credential-shaped patterns in script and configuration sources.
pub struct SecretPatternsCheck;

impl Check for SecretPatternsCheck {
    fn id(&self) -> CheckId {
        CheckId::SecretPatterns
    }

    fn name(&self) -> &'static str {
        "Secret patterns"
    }

    fn description(&self) -> &'static str {
        "Scans script and configuration sources for credential-shaped patterns"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        let mut results = Vec::new();

        for pattern in CREDENTIAL_PATTERNS.iter() {
            let matched: Vec<String> = ctx
                .tree
                .scan_files
                .iter()
                .filter(|f| pattern.regex.is_match(&f.content))
                .map(|f| f.path.display().to_string())
                .collect();

            if matched.is_empty() {
                continue;
            }

            let shown = matched
                .iter()
                .take(MAX_LISTED_FILES)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            let suffix = if matched.len() > MAX_LISTED_FILES {
                format!(" and {} more", matched.len() - MAX_LISTED_FILES)
            } else {
                String::new()
            };
            results.push(CheckResult::at(
                severity_on_violation(self.id()),
                self.id(),
                format!(
                    "Pattern '{}' matched in {} file(s): {shown}{suffix}",
                    pattern.name,
                    matched.len()
                ),
            ));
        }

        if results.is_empty() {
            results.push(CheckResult::pass(
                self.id(),
                "No credential-shaped patterns found",
            ));
        }
        results
    }
}

/// Advisory verified-secret scan via trufflehog, when installed.
pub struct SecretScannerCheck;

impl Check for SecretScannerCheck {
    fn id(&self) -> CheckId {
        CheckId::SecretScanner
    }

    fn name(&self) -> &'static str {
        "Secret scanner"
    }

    fn description(&self) -> &'static str {
        "Runs trufflehog against the project when the scanner is installed"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        use crate::tools::ToolOutcome;

        let root = ctx.tree.root.to_string_lossy();
        match ctx
            .tools
            .try_run("trufflehog", &["filesystem", "--no-update", root.as_ref()])
        {
            ToolOutcome::Unavailable => vec![CheckResult::warn(
                self.id(),
                "trufflehog not installed, scan skipped",
            )],
            // The scanner's own findings are advisory; a completed run
            // passes regardless of what it printed.
            ToolOutcome::Ran { .. } => {
                vec![CheckResult::pass(self.id(), "trufflehog scan completed")]
            }
        }
    }
}
