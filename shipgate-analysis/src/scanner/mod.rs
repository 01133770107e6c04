//! Project tree scanner.
//!
//! Walks the project root once, skipping hidden and dependency directories,
//! and produces the file inventory the check battery consumes.

pub mod ignores;
pub mod types;
pub mod walker;

pub use types::{FileKind, ProjectTree, ScanStats, SourceFile};
