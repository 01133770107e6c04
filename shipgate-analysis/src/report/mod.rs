//! Reporters — console and JSON output.

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonReporter;

use crate::gate::GateReport;

/// Trait for report generators.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &GateReport) -> Result<String, String>;
}
