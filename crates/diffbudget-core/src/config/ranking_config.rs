use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights of the file-priority heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub main_language_bonus: i64,
    /// Cap on the added+removed line bonus.
    pub volume_cap: usize,
    pub config_adjustment: i64,
    pub test_adjustment: i64,
    pub generated_adjustment: i64,
    /// Extra glob patterns classified as generated files.
    pub generated_globs: Vec<String>,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            main_language_bonus: defaults::DEFAULT_MAIN_LANGUAGE_BONUS,
            volume_cap: defaults::DEFAULT_VOLUME_CAP,
            config_adjustment: defaults::DEFAULT_CONFIG_ADJUSTMENT,
            test_adjustment: defaults::DEFAULT_TEST_ADJUSTMENT,
            generated_adjustment: defaults::DEFAULT_GENERATED_ADJUSTMENT,
            generated_globs: Vec::new(),
        }
    }
}
