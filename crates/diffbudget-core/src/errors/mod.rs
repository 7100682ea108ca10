//! Error handling for diffbudget.
//! One error enum per subsystem, `thiserror` only.

pub mod budget_error;
pub mod config_error;
pub mod engine_error;
pub mod error_code;
pub mod patch_error;
pub mod tokenizer_error;

pub use budget_error::BudgetError;
pub use config_error::ConfigError;
pub use engine_error::EngineError;
pub use error_code::ErrorCode;
pub use patch_error::PatchError;
pub use tokenizer_error::TokenizerError;
