use serde::{Deserialize, Serialize};

use super::defaults;

/// Token budget for one compression call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Hard ceiling for the whole formatted diff.
    pub max_tokens: usize,
    /// Reserved up front for headers and section labels.
    pub overhead_reserve: usize,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            max_tokens: defaults::DEFAULT_MAX_TOKENS,
            overhead_reserve: defaults::DEFAULT_OVERHEAD_RESERVE,
        }
    }
}
