//! # diffbudget-diff
//!
//! Turns a changed file into `Hunk`s and reshapes them:
//! - `parser`: unified-diff text to hunks, strict about header counts
//! - `synth`: hunks from a base/head text pair
//! - `source`: picks the right path for a `ChangedFile`
//! - `context`: widen hunks with surrounding lines, or clip them down
//! - `render`: hunks back to text

pub mod context;
pub mod parser;
pub mod render;
pub mod source;
pub mod synth;

pub use context::{clip, clip_all, extend, extend_all, ContextExtender};
pub use parser::parse_patch;
pub use render::{render_hunk, render_numbered, render_patch};
pub use source::HunkSource;
pub use synth::{synthesize_hunks, whole_file_hunk};
