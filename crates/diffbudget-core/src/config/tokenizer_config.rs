use serde::{Deserialize, Serialize};

use super::defaults;

/// Which tokenizer the engine counts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// `cl100k_base`, `o200k_base`, `chars`, or `ratio`.
    pub encoding: String,
    /// Entries kept in the content-hash count cache.
    pub cache_capacity: u64,
    /// Divisor of the `ratio` estimate.
    pub chars_per_token: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            encoding: defaults::DEFAULT_ENCODING.to_string(),
            cache_capacity: defaults::DEFAULT_TOKEN_CACHE_CAPACITY,
            chars_per_token: defaults::DEFAULT_CHARS_PER_TOKEN,
        }
    }
}
