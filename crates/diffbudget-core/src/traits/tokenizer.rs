use crate::errors::TokenizerError;

/// Maps text to a token count for one model family.
///
/// Implementations must be pure: same text, same count, and `""` counts 0.
/// Swapping the tokenizer requires no change anywhere else in the engine.
pub trait Tokenizer: Send + Sync {
    fn count(&self, text: &str) -> Result<usize, TokenizerError>;

    /// Short identifier used in logs and cache diagnostics.
    fn name(&self) -> &str;
}
