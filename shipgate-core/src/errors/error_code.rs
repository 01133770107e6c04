//! ErrorCode trait for stable error tagging.

/// Trait for tagging shipgate errors with a stable code string.
/// Every error enum implements this so logs and reports can carry a
/// machine-matchable code alongside the human message.
pub trait ErrorCode {
    /// Returns the stable error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted tagged string: `[ERROR_CODE] message`.
    fn tagged(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const ROOT_UNREADABLE: &str = "ROOT_UNREADABLE";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
