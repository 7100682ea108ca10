//! Configuration system for diffbudget.
//! TOML-based; a single `EngineConfig` value is passed into the engine.

pub mod budget_config;
pub mod context_config;
pub mod defaults;
pub mod engine_config;
pub mod filter_config;
pub mod logging_config;
pub mod output_config;
pub mod ranking_config;
pub mod tokenizer_config;

pub use budget_config::BudgetConfig;
pub use context_config::ContextConfig;
pub use engine_config::EngineConfig;
pub use filter_config::FilterConfig;
pub use logging_config::{LogFormat, LoggingConfig};
pub use output_config::OutputConfig;
pub use ranking_config::RankingConfig;
pub use tokenizer_config::TokenizerConfig;
