use diffbudget_core::config::OutputConfig;
use diffbudget_core::models::{ChangedFile, EditKind, Hunk};
use diffbudget_diff::{render_numbered, render_patch};

pub const CLIPPED_HEADING: &str = "## Files with reduced context:\n\n";
pub const OMITTED_HEADING: &str =
    "## Additional modified files (insufficient token budget to process):\n";

/// Lays out per-file blocks and the three output sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffFormatter {
    line_numbers: bool,
}

impl DiffFormatter {
    pub fn new(line_numbers: bool) -> Self {
        Self { line_numbers }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.line_numbers)
    }

    /// One file: a `## File:` header line, the optional summary, then the
    /// hunks. A file without hunks renders as its header alone.
    pub fn file_block(&self, file: &ChangedFile, hunks: &[Hunk]) -> String {
        let mut block = format!("## File: '{}'", file.filename);
        match (file.edit_kind, file.old_filename.as_deref()) {
            (EditKind::Renamed, Some(old)) => {
                block.push_str(&format!(" (renamed from '{old}')"));
            }
            (EditKind::Added, _) => block.push_str(" (new file)"),
            (EditKind::Deleted, _) => block.push_str(" (deleted file)"),
            _ => {}
        }
        block.push('\n');
        if let Some(summary) = &file.ai_summary {
            block.push_str("Summary: ");
            block.push_str(summary.trim());
            block.push('\n');
        }
        if self.line_numbers {
            block.push_str(&render_numbered(hunks));
        } else {
            block.push_str(&render_patch(hunks));
        }
        block
    }

    /// Full-context blocks, then clipped blocks under their heading, then
    /// the omitted filename list. Empty sections are left out.
    pub fn compose(&self, full: &[String], clipped: &[String], omitted: &[String]) -> String {
        let mut out = String::new();
        for block in full {
            out.push_str(block);
            out.push('\n');
        }
        if !clipped.is_empty() {
            out.push_str(CLIPPED_HEADING);
            for block in clipped {
                out.push_str(block);
                out.push('\n');
            }
        }
        if !omitted.is_empty() {
            out.push_str(OMITTED_HEADING);
            for name in omitted {
                out.push_str("- ");
                out.push_str(name);
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use diffbudget_diff::parse_patch;

    use super::*;

    #[test]
    fn block_has_header_and_patch() {
        let file = ChangedFile::from_patch("src/a.rs", EditKind::Modified, "@@ -1 +1 @@\n-a\n+b\n");
        let hunks = parse_patch(&file.raw_patch).unwrap();
        let block = DiffFormatter::default().file_block(&file, &hunks);
        assert_eq!(block, "## File: 'src/a.rs'\n@@ -1,1 +1,1 @@\n-a\n+b\n");
    }

    #[test]
    fn rename_without_changes_is_header_only() {
        let file = ChangedFile::from_contents("new.rs", EditKind::Renamed, "x\n", "x\n")
            .with_old_filename("old.rs");
        let block = DiffFormatter::default().file_block(&file, &[]);
        assert_eq!(block, "## File: 'new.rs' (renamed from 'old.rs')\n");
    }

    #[test]
    fn summary_is_included() {
        let file = ChangedFile::from_patch("a.py", EditKind::Added, "@@ -0,0 +1 @@\n+x\n")
            .with_summary("adds x");
        let hunks = parse_patch(&file.raw_patch).unwrap();
        let block = DiffFormatter::new(true).file_block(&file, &hunks);
        assert!(block.starts_with("## File: 'a.py' (new file)\nSummary: adds x\n"));
        assert!(block.contains("__new hunk__\n1 +x\n"));
    }

    #[test]
    fn sections_are_ordered_and_optional() {
        let f = DiffFormatter::default();
        assert_eq!(f.compose(&[], &[], &[]), "");
        let text = f.compose(
            &["A\n".to_string()],
            &["B\n".to_string()],
            &["c.rs".to_string()],
        );
        assert_eq!(
            text,
            format!("A\n\n{CLIPPED_HEADING}B\n\n{OMITTED_HEADING}- c.rs\n")
        );
    }
}
