//! Concrete `Tokenizer` implementations.

use std::sync::Arc;

use diffbudget_core::config::TokenizerConfig;
use diffbudget_core::errors::TokenizerError;
use diffbudget_core::traits::Tokenizer;
use tiktoken_rs::CoreBPE;

/// Exact BPE counts for OpenAI-family models.
pub struct TiktokenTokenizer {
    encoding: &'static str,
    bpe: CoreBPE,
}

impl TiktokenTokenizer {
    /// Load a named BPE encoding (`cl100k_base` or `o200k_base`).
    pub fn new(encoding: &str) -> Result<Self, TokenizerError> {
        let (encoding, loaded) = match encoding {
            "cl100k_base" => ("cl100k_base", tiktoken_rs::cl100k_base()),
            "o200k_base" => ("o200k_base", tiktoken_rs::o200k_base()),
            other => {
                return Err(TokenizerError::UnknownEncoding {
                    encoding: other.to_string(),
                })
            }
        };
        let bpe = loaded.map_err(|e| TokenizerError::LoadFailed {
            encoding: encoding.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { encoding, bpe })
    }

    pub fn cl100k() -> Result<Self, TokenizerError> {
        Self::new("cl100k_base")
    }
}

impl Tokenizer for TiktokenTokenizer {
    fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        Ok(self.bpe.encode_ordinary(text).len())
    }

    fn name(&self) -> &str {
        self.encoding
    }
}

/// One token per Unicode scalar value. Deterministic stand-in for tests
/// where exact budget arithmetic matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharTokenizer;

impl Tokenizer for CharTokenizer {
    fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        Ok(text.chars().count())
    }

    fn name(&self) -> &str {
        "chars"
    }
}

/// `ceil(chars / chars_per_token)`. Cheap estimate for models without a
/// published vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct RatioTokenizer {
    chars_per_token: usize,
}

impl RatioTokenizer {
    /// A zero ratio is treated as one char per token.
    pub fn new(chars_per_token: usize) -> Self {
        Self {
            chars_per_token: chars_per_token.max(1),
        }
    }
}

impl Tokenizer for RatioTokenizer {
    fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        Ok(text.chars().count().div_ceil(self.chars_per_token))
    }

    fn name(&self) -> &str {
        "ratio"
    }
}

/// Build the tokenizer named by `config.encoding`.
pub fn tokenizer_from_config(
    config: &TokenizerConfig,
) -> Result<Arc<dyn Tokenizer>, TokenizerError> {
    match config.encoding.as_str() {
        "chars" => Ok(Arc::new(CharTokenizer)),
        "ratio" => Ok(Arc::new(RatioTokenizer::new(config.chars_per_token))),
        other => Ok(Arc::new(TiktokenTokenizer::new(other)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_tokenizer_counts_scalars_not_bytes() {
        let t = CharTokenizer;
        assert_eq!(t.count("").unwrap(), 0);
        assert_eq!(t.count("abc").unwrap(), 3);
        assert_eq!(t.count("héllo").unwrap(), 5);
    }

    #[test]
    fn test_ratio_tokenizer_rounds_up() {
        let t = RatioTokenizer::new(4);
        assert_eq!(t.count("").unwrap(), 0);
        assert_eq!(t.count("a").unwrap(), 1);
        assert_eq!(t.count("abcd").unwrap(), 1);
        assert_eq!(t.count("abcde").unwrap(), 2);
    }

    #[test]
    fn test_ratio_zero_is_clamped() {
        let t = RatioTokenizer::new(0);
        assert_eq!(t.count("abc").unwrap(), 3);
    }

    #[test]
    fn test_unknown_encoding_rejected() {
        let err = TiktokenTokenizer::new("gpt2-ish").err().unwrap();
        assert!(matches!(err, TokenizerError::UnknownEncoding { .. }));
    }

    #[test]
    fn test_config_selects_stub_tokenizers() {
        let mut config = TokenizerConfig::default();
        config.encoding = "chars".into();
        assert_eq!(tokenizer_from_config(&config).unwrap().name(), "chars");
        config.encoding = "ratio".into();
        assert_eq!(tokenizer_from_config(&config).unwrap().name(), "ratio");
    }
}
