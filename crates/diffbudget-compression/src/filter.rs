//! Drops files no reviewer reads as text: binaries, media, archives, and
//! anything matching the configured ignore globs.

use std::collections::HashSet;
use std::path::Path;

use diffbudget_core::config::FilterConfig;
use diffbudget_core::errors::ConfigError;
use glob::Pattern;

/// Diagnostic code for files removed by the filter.
pub const FILTERED: &str = "FILTERED";

#[derive(Debug, Clone)]
pub struct FileFilter {
    skip_extensions: HashSet<String>,
    ignore: Vec<Pattern>,
}

impl FileFilter {
    pub fn from_config(config: &FilterConfig) -> Result<Self, ConfigError> {
        let ignore = compile_globs(&config.ignore_globs, "filter.ignore_globs")?;
        Ok(Self {
            skip_extensions: config
                .skip_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            ignore,
        })
    }

    /// Whether the file should reach the parser.
    pub fn is_valid_file(&self, filename: &str) -> bool {
        self.skip_reason(filename).is_none()
    }

    /// Why a file is skipped, if it is.
    pub fn skip_reason(&self, filename: &str) -> Option<String> {
        if let Some(ext) = Path::new(filename).extension().and_then(|e| e.to_str()) {
            if self.skip_extensions.contains(&ext.to_ascii_lowercase()) {
                return Some(format!("non-code extension `.{ext}`"));
            }
        }
        self.ignore
            .iter()
            .find(|p| p.matches(filename))
            .map(|p| format!("matches ignore glob `{}`", p.as_str()))
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self {
            skip_extensions: FilterConfig::default()
                .skip_extensions
                .into_iter()
                .collect(),
            ignore: Vec::new(),
        }
    }
}

pub(crate) fn compile_globs(globs: &[String], field: &str) -> Result<Vec<Pattern>, ConfigError> {
    globs
        .iter()
        .map(|g| {
            Pattern::new(g).map_err(|e| ConfigError::ValidationFailed {
                field: field.to_string(),
                message: format!("invalid glob `{g}`: {e}"),
            })
        })
        .collect()
}
