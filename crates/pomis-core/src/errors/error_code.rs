//! PomisErrorCode trait: stable machine-readable codes for every error enum.

/// Every error enum implements this to expose a structured code string
/// that callers can match on without parsing messages.
pub trait PomisErrorCode {
    /// Returns the error code string (e.g., "PARTITION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const GRAPH_ERROR: &str = "GRAPH_ERROR";
pub const PARTITION_ERROR: &str = "PARTITION_ERROR";
pub const UNMAPPED_VARIABLE: &str = "UNMAPPED_VARIABLE";
pub const ENUMERATION_ERROR: &str = "ENUMERATION_ERROR";
pub const SEQUENCE_LIMIT: &str = "SEQUENCE_LIMIT";
pub const ARM_ERROR: &str = "ARM_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
