//! # diffbudget-tokens
//!
//! Token counting behind the `Tokenizer` seam: exact BPE counts via
//! `tiktoken-rs`, or cheap deterministic stand-ins. Counts are cached per
//! content hash. `TokenBudget` tracks a running total against a ceiling.

pub mod budget;
pub mod counter;
pub mod tokenizers;

pub use budget::TokenBudget;
pub use counter::TokenCounter;
pub use tokenizers::{tokenizer_from_config, CharTokenizer, RatioTokenizer, TiktokenTokenizer};
