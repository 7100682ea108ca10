//! Tokenizer errors. Propagated unchanged, never swallowed.

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizerError {
    #[error("tokenizer load failed: {encoding}: {reason}")]
    LoadFailed { encoding: String, reason: String },

    #[error("unknown tokenizer encoding: {encoding}")]
    UnknownEncoding { encoding: String },

    #[error("token counting failed: {reason}")]
    CountFailed { reason: String },
}

impl ErrorCode for TokenizerError {
    fn error_code(&self) -> &'static str {
        error_code::TOKENIZER_ERROR
    }
}
