//! Tracing initialization and configuration.

use std::fs::OpenOptions;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::LOG_ENV_VAR;
use crate::config::{LogFormat, LoggingConfig};
use crate::errors::ConfigError;

static INIT: Once = Once::new();

/// Initialize the process-wide tracing subscriber.
///
/// Reads `DIFFBUDGET_LOG` for per-module levels, e.g.
/// `DIFFBUDGET_LOG=diffbudget_compression=debug,diffbudget_diff=warn`,
/// and falls back to `config.level` when it is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber. A subscriber
/// installed by the host application is left in place.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let mut result = Ok(());
    INIT.call_once(|| {
        result = install(config);
    });
    result
}

fn install(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let stdout_layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .boxed(),
        LogFormat::Console => fmt::layer().with_target(true).boxed(),
    };

    let file_layer = match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ConfigError::LogFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    // try_init: the embedding application may already own the global subscriber.
    let _ = tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .with(filter)
        .try_init();
    Ok(())
}
