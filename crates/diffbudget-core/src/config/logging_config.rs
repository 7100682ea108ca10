use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Log line layout on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Console,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `DIFFBUDGET_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
    /// Optional plain-text log file, written alongside stdout.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}
