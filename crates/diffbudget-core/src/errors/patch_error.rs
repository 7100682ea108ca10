//! Patch parsing errors. Per-file and non-fatal for the batch.

use super::error_code::{self, ErrorCode};

/// Errors raised while turning a patch or a file pair into hunks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchError {
    #[error("malformed patch at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(
        "hunk `{header}` declares -{expected_base}/+{expected_head} lines but body has -{actual_base}/+{actual_head}"
    )]
    InconsistentLineCount {
        header: String,
        expected_base: usize,
        actual_base: usize,
        expected_head: usize,
        actual_head: usize,
    },

    #[error("no patch and no file content for {filename}")]
    EmptyContent { filename: String },
}

impl PatchError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}

impl ErrorCode for PatchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => error_code::MALFORMED_PATCH,
            Self::InconsistentLineCount { .. } => error_code::INCONSISTENT_LINE_COUNT,
            Self::EmptyContent { .. } => error_code::EMPTY_CONTENT,
        }
    }
}
