//! Source and declarative-config syntax validation.
//!
//! PHP validation delegates to `php -l` per source file and is skipped
//! outright when the interpreter is absent. YAML validation is in-process:
//! every YAML document in the tree must parse.

use serde::Deserialize;

use super::policy::severity_on_violation;
use super::types::{Check, CheckContext, CheckId, CheckResult};

/// First parse error in a (possibly multi-document) YAML source.
fn yaml_parse_error(content: &str) -> Option<String> {
    for document in serde_yaml::Deserializer::from_str(content) {
        if let Err(e) = serde_yaml::Value::deserialize(document) {
            return Some(e.to_string());
        }
    }
    None
}

/// Every PHP source passes the interpreter's lint mode.
pub struct PhpSyntaxCheck;

impl Check for PhpSyntaxCheck {
    fn id(&self) -> CheckId {
        CheckId::PhpSyntax
    }

    fn name(&self) -> &'static str {
        "PHP syntax"
    }

    fn description(&self) -> &'static str {
        "Validates every PHP source with php -l when the interpreter is installed"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        use crate::tools::ToolOutcome;

        // Interpreter absent: the whole check is skipped, nothing emitted.
        if !ctx.tools.is_available("php") {
            return Vec::new();
        }

        let mut results = Vec::new();
        for path in &ctx.tree.php_files {
            let path_str = path.to_string_lossy();
            let outcome = ctx.tools.try_run("php", &["-l", path_str.as_ref()]);
            if let ToolOutcome::Ran { success: false, .. } = outcome {
                let relative = path.strip_prefix(&ctx.tree.root).unwrap_or(path);
                results.push(CheckResult::at(
                    severity_on_violation(self.id()),
                    self.id(),
                    format!("PHP syntax error in {}", relative.display()),
                ));
            }
        }

        if results.is_empty() {
            results.push(CheckResult::pass(
                self.id(),
                format!("{} PHP source(s) parse cleanly", ctx.tree.php_files.len()),
            ));
        }
        results
    }
}

/// Every YAML document in the tree parses.
pub struct YamlSyntaxCheck;

impl Check for YamlSyntaxCheck {
    fn id(&self) -> CheckId {
        CheckId::YamlSyntax
    }

    fn name(&self) -> &'static str {
        "YAML syntax"
    }

    fn description(&self) -> &'static str {
        "Validates every YAML file with an in-process parser"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Vec<CheckResult> {
        let mut results = Vec::new();
        for file in &ctx.tree.yaml_files {
            if let Some(error) = yaml_parse_error(&file.content) {
                results.push(CheckResult::at(
                    severity_on_violation(self.id()),
                    self.id(),
                    format!("YAML parse failure in {}: {error}", file.path.display()),
                ));
            }
        }

        if results.is_empty() {
            results.push(CheckResult::pass(
                self.id(),
                format!("{} YAML file(s) parse cleanly", ctx.tree.yaml_files.len()),
            ));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_multi_document_yaml() {
        let content = "a: 1\n---\nb:\n  - 2\n  - 3\n";
        assert!(yaml_parse_error(content).is_none());
    }

    #[test]
    fn rejects_bad_indentation() {
        let content = "a:\n  b: 1\n c: 2\n";
        assert!(yaml_parse_error(content).is_some());
    }
}
