//! Core types, errors, config, tracing, and constants for shipgate.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
