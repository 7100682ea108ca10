use serde::{Deserialize, Serialize};

use super::Tier;

/// Final decision for one file that reached the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileOutcome {
    pub filename: String,
    pub tier: Tier,
    pub priority_score: i64,
    /// Tokens reserved for the file; zero when omitted.
    pub tokens: usize,
}

/// A file that never reached the allocator, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiagnostic {
    pub filename: String,
    pub code: String,
    pub message: String,
}

/// Per-file problems isolated from the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Files whose patch could not be parsed.
    pub unparseable: Vec<FileDiagnostic>,
    /// Files dropped before parsing (filtered or without content).
    pub skipped: Vec<FileDiagnostic>,
}

impl Diagnostics {
    pub fn is_clean(&self) -> bool {
        self.unparseable.is_empty() && self.skipped.is_empty()
    }
}

/// Output of one compression call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressionResult {
    pub formatted_text: String,
    pub fully_included: Vec<String>,
    pub clipped: Vec<String>,
    pub omitted_names: Vec<String>,
    /// One entry per allocated file, in rank order.
    pub outcomes: Vec<FileOutcome>,
    pub total_tokens_used: usize,
    pub diagnostics: Diagnostics,
}

impl CompressionResult {
    pub fn fully_included_count(&self) -> usize {
        self.fully_included.len()
    }

    pub fn clipped_count(&self) -> usize {
        self.clipped.len()
    }

    pub fn omitted_count(&self) -> usize {
        self.omitted_names.len()
    }

    /// Tier assigned to `filename`, if it reached the allocator.
    pub fn tier_of(&self, filename: &str) -> Option<Tier> {
        self.outcomes
            .iter()
            .find(|o| o.filename == filename)
            .map(|o| o.tier)
    }
}
