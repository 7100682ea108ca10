//! Top-level engine configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, BudgetConfig, ContextConfig, FilterConfig, LogFormat, LoggingConfig, OutputConfig,
    RankingConfig, TokenizerConfig,
};
use crate::errors::ConfigError;

/// Everything one compression call needs to know, as an explicit value.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`DIFFBUDGET_*`)
/// 2. The TOML file handed to `load`
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub budget: BudgetConfig,
    pub context: ContextConfig,
    pub ranking: RankingConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
    pub tokenizer: TokenizerConfig,
    pub logging: LoggingConfig,
}

impl EngineConfig {
    /// Load from an optional TOML file, apply env overrides, validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string. Missing sections fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored and the previous value kept.
    pub fn apply_env_overrides(&mut self) {
        if let Some(v) = env_parse::<usize>("DIFFBUDGET_MAX_TOKENS") {
            self.budget.max_tokens = v;
        }
        if let Some(v) = env_parse::<usize>("DIFFBUDGET_OVERHEAD_RESERVE") {
            self.budget.overhead_reserve = v;
        }
        if let Some(v) = env_parse::<usize>("DIFFBUDGET_MAX_EXTRA_LINES") {
            self.context.max_extra_lines = v;
        }
        if let Some(v) = env_parse::<usize>("DIFFBUDGET_CLIPPED_CONTEXT_LINES") {
            self.context.clipped_context_lines = v;
        }
        if let Ok(v) = std::env::var("DIFFBUDGET_TOKENIZER") {
            self.tokenizer.encoding = v;
        }
        if let Ok(v) = std::env::var("DIFFBUDGET_LOG_FORMAT") {
            match v.to_ascii_lowercase().as_str() {
                "json" => self.logging.format = LogFormat::Json,
                "console" => self.logging.format = LogFormat::Console,
                _ => {}
            }
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.budget.max_tokens == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "budget.max_tokens".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.tokenizer.chars_per_token == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "tokenizer.chars_per_token".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !defaults::KNOWN_ENCODINGS.contains(&self.tokenizer.encoding.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "tokenizer.encoding".to_string(),
                message: format!(
                    "unknown encoding `{}`, expected one of {}",
                    self.tokenizer.encoding,
                    defaults::KNOWN_ENCODINGS.join(", ")
                ),
            });
        }
        for pattern in self
            .ranking
            .generated_globs
            .iter()
            .chain(&self.filter.ignore_globs)
        {
            if pattern.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "glob".to_string(),
                    message: "glob patterns must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.parse().ok()
}
