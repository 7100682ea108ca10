//! Budget errors. Fatal for the whole compression call.

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    #[error("overhead reserve of {overhead} tokens exceeds max_tokens {max_tokens}")]
    Exhausted { overhead: usize, max_tokens: usize },
}

impl ErrorCode for BudgetError {
    fn error_code(&self) -> &'static str {
        error_code::BUDGET_EXHAUSTED
    }
}
