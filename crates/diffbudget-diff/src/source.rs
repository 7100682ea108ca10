//! Chooses how a changed file becomes hunks: raw patch, file pair, or a
//! whole-file hunk. Every path yields the same `Hunk` shape.

use diffbudget_core::config::ContextConfig;
use diffbudget_core::errors::PatchError;
use diffbudget_core::models::{ChangedFile, EditKind, Hunk, LineKind};
use tracing::debug;

use crate::{parser, synth};

#[derive(Debug, Clone, Copy)]
pub struct HunkSource {
    synth_context_lines: usize,
}

impl HunkSource {
    pub fn new(synth_context_lines: usize) -> Self {
        Self {
            synth_context_lines,
        }
    }

    pub fn from_config(config: &ContextConfig) -> Self {
        Self::new(config.synth_context_lines)
    }

    /// Hunks from whatever content is available. A non-empty patch always
    /// wins over the texts. Nothing at all yields no hunks.
    pub fn parse(
        &self,
        raw_patch: &str,
        base_text: Option<&str>,
        head_text: Option<&str>,
    ) -> Result<Vec<Hunk>, PatchError> {
        if !raw_patch.is_empty() {
            return parser::parse_patch(raw_patch);
        }
        let hunks = match (base_text, head_text) {
            (Some(base), Some(head)) => {
                synth::synthesize_hunks(base, head, self.synth_context_lines)
            }
            (None, Some(head)) => synth::whole_file_hunk(head, LineKind::Added)
                .into_iter()
                .collect(),
            (Some(base), None) => synth::whole_file_hunk(base, LineKind::Removed)
                .into_iter()
                .collect(),
            (None, None) => Vec::new(),
        };
        Ok(hunks)
    }

    /// Hunks for one changed file.
    ///
    /// Files with no patch and no text are rejected with `EmptyContent`.
    /// An Added file's base text and a Deleted file's head text are ignored
    /// even when a provider fills them in.
    pub fn parse_file(&self, file: &ChangedFile) -> Result<Vec<Hunk>, PatchError> {
        if !file.has_content() {
            return Err(PatchError::EmptyContent {
                filename: file.filename.clone(),
            });
        }
        let (base, head) = match file.edit_kind {
            EditKind::Added => (None, file.head()),
            EditKind::Deleted => (file.base(), None),
            _ => (file.base(), file.head()),
        };
        let hunks = self.parse(&file.raw_patch, base, head)?;
        debug!(
            file = %file.filename,
            from_patch = !file.raw_patch.is_empty(),
            hunks = hunks.len(),
            "hunks ready"
        );
        Ok(hunks)
    }
}

impl Default for HunkSource {
    fn default() -> Self {
        Self::from_config(&ContextConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_takes_precedence_over_texts() {
        let file = ChangedFile::from_patch("a.rs", EditKind::Modified, "@@ -1 +1 @@\n-a\n+b\n");
        let hunks = HunkSource::default().parse_file(&file).unwrap();
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].lines[1].text, "b");
    }

    #[test]
    fn file_pair_is_synthesized() {
        let file = ChangedFile::from_contents("a.rs", EditKind::Modified, "a\nb\n", "a\nc\n");
        let hunks = HunkSource::default().parse_file(&file).unwrap();
        assert_eq!(hunks[0].header(), "@@ -1,2 +1,2 @@");
    }

    #[test]
    fn added_file_becomes_one_added_hunk() {
        let file = ChangedFile::from_contents("new.py", EditKind::Added, "", "x = 1\ny = 2\n");
        let hunks = HunkSource::default().parse_file(&file).unwrap();
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].added_count(), 2);
    }

    #[test]
    fn deleted_file_becomes_one_removed_hunk() {
        let file = ChangedFile::from_contents("old.py", EditKind::Deleted, "x = 1\n", "");
        let hunks = HunkSource::default().parse_file(&file).unwrap();
        assert_eq!(hunks[0].removed_count(), 1);
        assert_eq!(hunks[0].header(), "@@ -1,1 +0,0 @@");
    }

    #[test]
    fn unchanged_rename_has_no_hunks() {
        let file = ChangedFile::from_contents("b.rs", EditKind::Renamed, "same\n", "same\n")
            .with_old_filename("a.rs");
        assert!(HunkSource::default().parse_file(&file).unwrap().is_empty());
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = ChangedFile::from_contents("a.rs", EditKind::Modified, "", "");
        let err = HunkSource::default().parse_file(&file).unwrap_err();
        assert_eq!(
            err,
            PatchError::EmptyContent {
                filename: "a.rs".into()
            }
        );
    }
}
