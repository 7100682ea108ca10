use serde::{Deserialize, Serialize};

use super::defaults;

/// Files dropped before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Lower-case extensions of files that are never reviewed.
    pub skip_extensions: Vec<String>,
    /// Glob patterns of paths that are never reviewed.
    pub ignore_globs: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            skip_extensions: defaults::DEFAULT_SKIP_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            ignore_globs: Vec::new(),
        }
    }
}
