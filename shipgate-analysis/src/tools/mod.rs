//! Optional external tool adapter.

pub mod adapter;

pub use adapter::{ToolAdapter, ToolOutcome};
