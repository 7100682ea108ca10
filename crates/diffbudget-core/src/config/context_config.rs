use serde::{Deserialize, Serialize};

use super::defaults;

/// How much surrounding code each hunk carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Extra context lines per hunk in the full-context tier, split across
    /// both sides of the hunk.
    pub max_extra_lines: usize,
    /// Context lines kept at each hunk boundary in the clipped tier.
    pub clipped_context_lines: usize,
    /// Context lines used when synthesizing hunks from full file texts.
    pub synth_context_lines: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_extra_lines: defaults::DEFAULT_MAX_EXTRA_LINES,
            clipped_context_lines: defaults::DEFAULT_CLIPPED_CONTEXT_LINES,
            synth_context_lines: defaults::DEFAULT_SYNTH_CONTEXT_LINES,
        }
    }
}
