//! Gate orchestration — runs the battery and folds results into a report.

pub mod report;
pub mod runner;

pub use report::{GateReport, Verdict};
pub use runner::GateRunner;
