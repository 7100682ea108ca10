//! Data model shared by every stage of the pipeline.

pub mod changed_file;
pub mod compression_result;
pub mod hunk;
pub mod ranked_file;

pub use changed_file::{ChangedFile, EditKind};
pub use compression_result::{CompressionResult, Diagnostics, FileDiagnostic, FileOutcome};
pub use hunk::{DiffLine, Hunk, LineKind};
pub use ranked_file::{FileRole, RankedFile, Tier};
