//! JSON reporter — structured machine-readable output.

use serde_json::json;

use crate::gate::{GateReport, Verdict};

use super::Reporter;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &GateReport) -> Result<String, String> {
        let checks: Vec<serde_json::Value> = report
            .results
            .iter()
            .map(|r| {
                json!({
                    "check_id": r.check_id,
                    "status": r.status,
                    "message": r.message,
                })
            })
            .collect();

        let verdict = Verdict::classify(report);
        let output = json!({
            "verdict": verdict,
            "exit_code": verdict.exit_code(),
            "passed": report.passed,
            "warned": report.warned,
            "failed": report.failed,
            "total": report.total(),
            "checks": checks,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckId, CheckResult};

    #[test]
    fn emits_verdict_and_counters() {
        let mut report = GateReport::new();
        report.record(CheckResult::warn(CheckId::DockerfileTagPinning, "unpinned"));

        let text = JsonReporter.generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["verdict"], "success-with-warnings");
        assert_eq!(value["exit_code"], 0);
        assert_eq!(value["warned"], 1);
        assert_eq!(value["checks"][0]["check_id"], "dockerfile-tag-pinning");
        assert_eq!(value["checks"][0]["status"], "warn");
    }
}
