use std::sync::Arc;

use diffbudget_core::config::TokenizerConfig;
use diffbudget_core::errors::TokenizerError;
use diffbudget_core::traits::Tokenizer;
use moka::sync::Cache;

use crate::tokenizers;

/// Token counter over any `Tokenizer`, caching results per blake3 content
/// hash. Cloning is cheap and clones share the cache.
#[derive(Clone)]
pub struct TokenCounter {
    tokenizer: Arc<dyn Tokenizer>,
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Wrap a tokenizer with a cache of the given capacity.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, cache_capacity: u64) -> Self {
        Self {
            tokenizer,
            cache: Cache::new(cache_capacity),
        }
    }

    /// Build the tokenizer named by the config.
    pub fn from_config(config: &TokenizerConfig) -> Result<Self, TokenizerError> {
        let tokenizer = tokenizers::tokenizer_from_config(config)?;
        Ok(Self::new(tokenizer, config.cache_capacity))
    }

    /// Count tokens in the given text (uncached).
    pub fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        if text.is_empty() {
            return Ok(0);
        }
        self.tokenizer.count(text)
    }

    /// Count tokens with content-hash caching.
    /// Failures are not cached.
    pub fn count_cached(&self, text: &str) -> Result<usize, TokenizerError> {
        if text.is_empty() {
            return Ok(0);
        }
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        if let Some(count) = self.cache.get(&hash) {
            return Ok(count);
        }
        let count = self.tokenizer.count(text)?;
        self.cache.insert(hash, count);
        Ok(count)
    }

    pub fn tokenizer_name(&self) -> &str {
        self.tokenizer.name()
    }
}

impl std::fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCounter")
            .field("tokenizer", &self.tokenizer.name())
            .field("cached_entries", &self.cache.entry_count())
            .finish()
    }
}
