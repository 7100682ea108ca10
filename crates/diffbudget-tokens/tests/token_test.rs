use std::sync::Arc;

use diffbudget_core::config::TokenizerConfig;
use diffbudget_tokens::{CharTokenizer, TiktokenTokenizer, TokenBudget, TokenCounter};

fn cl100k_counter() -> TokenCounter {
    TokenCounter::new(Arc::new(TiktokenTokenizer::cl100k().unwrap()), 1_000)
}

#[test]
fn count_empty_string_is_zero() {
    let counter = cl100k_counter();
    assert_eq!(counter.count("").unwrap(), 0);
    assert_eq!(counter.count_cached("").unwrap(), 0);
}

#[test]
fn count_simple_text() {
    let counter = cl100k_counter();
    let count = counter.count("hello world").unwrap();
    assert!(count > 0, "non-empty text should have >0 tokens");
    assert!(count < 10, "hello world should be a few tokens, got {}", count);
}

#[test]
fn o200k_loads_and_counts() {
    let counter = TokenCounter::new(Arc::new(TiktokenTokenizer::new("o200k_base").unwrap()), 10);
    assert!(counter.count("fn main() {}").unwrap() > 0);
    assert_eq!(counter.tokenizer_name(), "o200k_base");
}

#[test]
fn count_cached_equals_uncached() {
    let counter = cl100k_counter();
    let text = "@@ -1,3 +1,4 @@\n fn main() {\n+    println!(\"hi\");\n }\n";
    let uncached = counter.count(text).unwrap();
    let cached = counter.count_cached(text).unwrap();
    assert_eq!(uncached, cached, "cached and uncached counts must match");
    assert_eq!(counter.count_cached(text).unwrap(), cached);
}

#[test]
fn clones_share_the_cache() {
    let counter = TokenCounter::new(Arc::new(CharTokenizer), 10);
    let other = counter.clone();
    assert_eq!(counter.count_cached("shared").unwrap(), 6);
    assert_eq!(other.count_cached("shared").unwrap(), 6);
}

#[test]
fn from_config_defaults_to_cl100k() {
    let counter = TokenCounter::from_config(&TokenizerConfig::default()).unwrap();
    assert_eq!(counter.tokenizer_name(), "cl100k_base");
}

#[test]
fn budget_tracks_reservations_against_counts() {
    let counter = TokenCounter::new(Arc::new(CharTokenizer), 10);
    let mut budget = TokenBudget::new(20);
    let a = counter.count("0123456789").unwrap();
    assert!(budget.reserve(a));
    assert!(budget.reserve(a));
    assert!(!budget.reserve(1));
    assert_eq!(budget.consumed(), budget.max_tokens());
}
