//! Configuration for shipgate.

pub mod gate_config;

pub use gate_config::GateConfig;
