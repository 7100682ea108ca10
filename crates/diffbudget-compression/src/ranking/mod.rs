//! Deterministic file ranking.

mod classifier;
mod scorer;

pub use classifier::PatternClassifier;
pub use scorer::{main_language, FileRanker};
