//! # diffbudget-core
//!
//! Foundation crate for the diffbudget engine.
//! Defines the change-set data model, the error taxonomy, configuration,
//! collaborator traits, and tracing setup. Every other crate depends on this.

pub mod config;
pub mod errors;
pub mod language;
pub mod models;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{EngineError, ErrorCode};
pub use models::{
    ChangedFile, CompressionResult, DiffLine, EditKind, FileRole, Hunk, LineKind, RankedFile,
    Tier,
};
pub use traits::{RoleClassifier, Tokenizer};
