//! Run report and verdict classification.

use serde::{Deserialize, Serialize};

use crate::checks::{CheckResult, CheckStatus};

/// Aggregate state for one gate run.
///
/// [`GateReport::record`] is the single mutation point: it appends the
/// result and increments exactly one counter, so the counter sum always
/// equals the number of recorded results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateReport {
    pub results: Vec<CheckResult>,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl GateReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one check result.
    pub fn record(&mut self, result: CheckResult) {
        match result.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warn => self.warned += 1,
            CheckStatus::Fail => self.failed += 1,
        }
        self.results.push(result);
    }

    /// Total results recorded.
    pub fn total(&self) -> usize {
        self.results.len()
    }
}

/// Final classification of a gate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    Success,
    SuccessWithWarnings,
    Failure,
}

impl Verdict {
    /// Classify a report. Pure function of the final counters: FAILURE when
    /// anything failed, else SUCCESS_WITH_WARNINGS when anything warned.
    pub fn classify(report: &GateReport) -> Self {
        if report.failed > 0 {
            Self::Failure
        } else if report.warned > 0 {
            Self::SuccessWithWarnings
        } else {
            Self::Success
        }
    }

    /// Process exit code. Warnings do not block.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success | Self::SuccessWithWarnings => 0,
            Self::Failure => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::SuccessWithWarnings => "SUCCESS WITH WARNINGS",
            Self::Failure => "FAILURE",
        }
    }
}
