//! Collaborator seams. Implementations live outside this crate.

pub mod classifier;
pub mod tokenizer;

pub use classifier::RoleClassifier;
pub use tokenizer::Tokenizer;
