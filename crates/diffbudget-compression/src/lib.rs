//! # diffbudget-compression
//!
//! Reduces a change-set to text that fits a token budget.
//! Files are filtered, ranked by a deterministic heuristic, then packed in
//! rank order at the best tier that still fits: full context, clipped
//! context, or listed by name only.

pub mod allocator;
pub mod engine;
pub mod filter;
pub mod ranking;

pub use allocator::{allocate, DiffFormatter, ParsedFile};
pub use engine::CompressionEngine;
pub use filter::FileFilter;
pub use ranking::{main_language, FileRanker, PatternClassifier};
