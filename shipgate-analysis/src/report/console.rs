//! Console reporter — human-readable, optionally colorized output.

use crate::checks::{CheckResult, CheckStatus};
use crate::gate::{GateReport, Verdict};

use super::Reporter;

const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Console reporter. Colorization is cosmetic and can be disabled.
pub struct ConsoleReporter {
    color: bool,
}

impl ConsoleReporter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn status_tag(&self, status: CheckStatus) -> String {
        match status {
            CheckStatus::Pass => self.paint(GREEN, "PASS"),
            CheckStatus::Warn => self.paint(YELLOW, "WARN"),
            CheckStatus::Fail => self.paint(RED, "FAIL"),
        }
    }

    /// One progress line for a result, as streamed while the gate runs.
    pub fn format_result(&self, result: &CheckResult) -> String {
        format!(
            "[{}] {}: {}",
            self.status_tag(result.status),
            result.check_id,
            result.message
        )
    }

    /// The summary block printed after the battery completes.
    pub fn format_summary(&self, report: &GateReport) -> String {
        let verdict = Verdict::classify(report);
        let verdict_tag = match verdict {
            Verdict::Success => self.paint(GREEN, verdict.as_str()),
            Verdict::SuccessWithWarnings => self.paint(YELLOW, verdict.as_str()),
            Verdict::Failure => self.paint(RED, verdict.as_str()),
        };
        format!(
            "{}\n{} passed, {} warned, {} failed ({} checks)\n{}: {}",
            self.paint(BOLD, "Summary"),
            report.passed,
            report.warned,
            report.failed,
            report.total(),
            self.paint(BOLD, "Verdict"),
            verdict_tag
        )
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &GateReport) -> Result<String, String> {
        let mut out = String::new();
        for result in &report.results {
            out.push_str(&self.format_result(result));
            out.push('\n');
        }
        out.push_str(&self.format_summary(report));
        out.push('\n');
        Ok(out)
    }
}
