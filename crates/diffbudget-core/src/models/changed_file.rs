use serde::{Deserialize, Serialize};

use crate::language;

/// How a file was touched by the change-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    Added,
    Deleted,
    Modified,
    Renamed,
    Unknown,
}

impl EditKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Modified => "modified",
            Self::Renamed => "renamed",
            Self::Unknown => "unknown",
        }
    }
}

/// One file touched by a pull request, as handed over by the provider.
///
/// Constructed once per review request and never mutated by the engine.
/// Either `raw_patch` or the `base_text`/`head_text` pair carries the change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
    #[serde(default)]
    pub old_filename: Option<String>,
    pub edit_kind: EditKind,
    #[serde(default)]
    pub base_text: String,
    #[serde(default)]
    pub head_text: String,
    #[serde(default)]
    pub raw_patch: String,
    #[serde(default)]
    pub added_lines: usize,
    #[serde(default)]
    pub removed_lines: usize,
    /// Inferred from the extension when the provider leaves it out.
    #[serde(default)]
    pub language: Option<String>,
    /// Written by an external summarizer, carried through untouched.
    #[serde(default)]
    pub ai_summary: Option<String>,
}

impl ChangedFile {
    /// A file described by a unified patch. Added/removed counts are tallied
    /// from the patch body.
    pub fn from_patch(
        filename: impl Into<String>,
        edit_kind: EditKind,
        raw_patch: impl Into<String>,
    ) -> Self {
        let filename = filename.into();
        let raw_patch = raw_patch.into();
        let (added_lines, removed_lines) = tally_patch_lines(&raw_patch);
        Self {
            language: language::language_for_path(&filename).map(str::to_string),
            filename,
            old_filename: None,
            edit_kind,
            base_text: String::new(),
            head_text: String::new(),
            raw_patch,
            added_lines,
            removed_lines,
            ai_summary: None,
        }
    }

    /// A file described by its full content before and after the change.
    pub fn from_contents(
        filename: impl Into<String>,
        edit_kind: EditKind,
        base_text: impl Into<String>,
        head_text: impl Into<String>,
    ) -> Self {
        let filename = filename.into();
        Self {
            language: language::language_for_path(&filename).map(str::to_string),
            filename,
            old_filename: None,
            edit_kind,
            base_text: base_text.into(),
            head_text: head_text.into(),
            raw_patch: String::new(),
            added_lines: 0,
            removed_lines: 0,
            ai_summary: None,
        }
    }

    pub fn with_old_filename(mut self, old_filename: impl Into<String>) -> Self {
        self.old_filename = Some(old_filename.into());
        self
    }

    pub fn with_line_counts(mut self, added: usize, removed: usize) -> Self {
        self.added_lines = added;
        self.removed_lines = removed;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.ai_summary = Some(summary.into());
        self
    }

    /// Language as supplied, or inferred from the filename.
    pub fn language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .or_else(|| language::language_for_path(&self.filename))
    }

    /// `true` when there is something to diff.
    pub fn has_content(&self) -> bool {
        !self.raw_patch.is_empty() || !self.base_text.is_empty() || !self.head_text.is_empty()
    }

    pub fn changed_line_count(&self) -> usize {
        self.added_lines + self.removed_lines
    }

    /// Base text when the provider supplied one.
    pub fn base(&self) -> Option<&str> {
        (!self.base_text.is_empty()).then_some(self.base_text.as_str())
    }

    /// Head text when the provider supplied one.
    pub fn head(&self) -> Option<&str> {
        (!self.head_text.is_empty()).then_some(self.head_text.as_str())
    }
}

/// Count `+`/`-` body lines of a unified patch. `+++`/`---` are file
/// headers only before the first `@@`.
fn tally_patch_lines(patch: &str) -> (usize, usize) {
    let mut added = 0;
    let mut removed = 0;
    let mut in_body = false;
    for line in patch.lines() {
        if line.starts_with("@@") {
            in_body = true;
            continue;
        }
        if !in_body {
            continue;
        }
        if line.starts_with('+') {
            added += 1;
        } else if line.starts_with('-') {
            removed += 1;
        }
    }
    (added, removed)
}
