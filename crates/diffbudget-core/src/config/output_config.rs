use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Render hunks as numbered `__new hunk__`/`__old hunk__` blocks
    /// instead of plain unified diff.
    pub line_numbers: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_numbers: defaults::DEFAULT_LINE_NUMBERS,
        }
    }
}
