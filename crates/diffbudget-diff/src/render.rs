//! Hunks back to text.

use std::fmt::Write;

use diffbudget_core::models::{Hunk, LineKind};

/// One hunk in unified-diff form, newline-terminated.
pub fn render_hunk(hunk: &Hunk) -> String {
    let mut out = String::with_capacity(hunk.lines.iter().map(|l| l.text.len() + 2).sum());
    out.push_str(&hunk.header());
    out.push('\n');
    for line in &hunk.lines {
        out.push(line.kind.prefix());
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}

/// A file's hunks in unified-diff form. Parses back to the same hunks.
pub fn render_patch(hunks: &[Hunk]) -> String {
    hunks.iter().map(render_hunk).collect()
}

/// Line-numbered layout: for each hunk a `__new hunk__` block (context and
/// added lines, prefixed with their head line number) followed by an
/// `__old hunk__` block of context and removed lines. Either block is left
/// out when it would show no change.
pub fn render_numbered(hunks: &[Hunk]) -> String {
    let mut out = String::new();
    for hunk in hunks {
        out.push('\n');
        out.push_str(&hunk.header());
        out.push('\n');

        if hunk.added_count() > 0 || hunk.removed_count() == 0 {
            out.push_str("__new hunk__\n");
            for line in hunk.lines.iter().filter(|l| l.kind != LineKind::Removed) {
                let _ = writeln!(
                    out,
                    "{} {}{}",
                    line.line_number(),
                    line.kind.prefix(),
                    line.text
                );
            }
        }
        if hunk.removed_count() > 0 {
            out.push_str("__old hunk__\n");
            for line in hunk.lines.iter().filter(|l| l.kind != LineKind::Added) {
                out.push(line.kind.prefix());
                out.push_str(&line.text);
                out.push('\n');
            }
        }
    }
    out
}
