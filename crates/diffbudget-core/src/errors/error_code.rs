//! Stable error codes for diagnostics and collaborators.

/// Every error enum implements this to expose a machine-readable code.
/// The codes end up in `FileDiagnostic::code` and in log fields.
pub trait ErrorCode {
    /// Returns the stable code string (e.g. "MALFORMED_PATCH").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn display_code(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MALFORMED_PATCH: &str = "MALFORMED_PATCH";
pub const INCONSISTENT_LINE_COUNT: &str = "INCONSISTENT_LINE_COUNT";
pub const EMPTY_CONTENT: &str = "EMPTY_CONTENT";
pub const BUDGET_EXHAUSTED: &str = "BUDGET_EXHAUSTED";
pub const TOKENIZER_ERROR: &str = "TOKENIZER_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
