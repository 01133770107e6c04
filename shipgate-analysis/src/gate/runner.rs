//! Sequential gate runner.

use tracing::debug;

use crate::checks::{self, Check, CheckContext, CheckResult};
use crate::scanner::ProjectTree;
use crate::tools::ToolAdapter;

use super::report::GateReport;

/// Runs the full check battery against a scanned project tree.
///
/// Checks execute strictly sequentially, in catalog order, each exactly
/// once; no outcome short-circuits the rest of the battery.
pub struct GateRunner {
    battery: Vec<Box<dyn Check>>,
}

impl GateRunner {
    /// Runner over the full catalog.
    pub fn new() -> Self {
        Self {
            battery: checks::catalog(),
        }
    }

    /// Run every check and fold the results into a report.
    pub fn run(&self, tree: &ProjectTree, tools: &ToolAdapter) -> GateReport {
        self.run_with(tree, tools, |_| {})
    }

    /// Run every check, invoking `observer` as each result is recorded so
    /// callers can stream progress while the battery is still executing.
    pub fn run_with<F>(&self, tree: &ProjectTree, tools: &ToolAdapter, mut observer: F) -> GateReport
    where
        F: FnMut(&CheckResult),
    {
        let ctx = CheckContext { tree, tools };
        let mut report = GateReport::new();

        for check in &self.battery {
            debug!(check = %check.id(), "evaluating");
            for result in check.evaluate(&ctx) {
                observer(&result);
                report.record(result);
            }
        }

        report
    }

    /// The battery, for catalog listings.
    pub fn battery(&self) -> &[Box<dyn Check>] {
        &self.battery
    }
}

impl Default for GateRunner {
    fn default() -> Self {
        Self::new()
    }
}
