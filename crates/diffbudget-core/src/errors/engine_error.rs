//! Top-level error returned by a compression call.

use super::error_code::ErrorCode;
use super::{BudgetError, ConfigError, PatchError, TokenizerError};

/// Fatal errors of one compression call.
/// Per-file patch errors normally land in the result diagnostics instead;
/// the `Patch` variant exists for callers that parse a single file directly.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Patch error: {0}")]
    Patch(#[from] PatchError),

    #[error("Budget error: {0}")]
    Budget(#[from] BudgetError),

    #[error("Tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Patch(e) => e.error_code(),
            Self::Budget(e) => e.error_code(),
            Self::Tokenizer(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
