//! Hunks synthesized from full file texts, for providers that hand over a
//! base/head pair instead of a patch.

use diffbudget_core::models::{DiffLine, Hunk, LineKind};
use similar::{Algorithm, ChangeTag, TextDiff};

/// Line-level Myers diff of `base` against `head`, grouped into hunks with
/// `context` lines around each change (the `diff -U<context>` layout).
/// Identical texts yield no hunks.
pub fn synthesize_hunks(base: &str, head: &str, context: usize) -> Vec<Hunk> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(base, head);

    let mut hunks = Vec::new();
    for group in diff.grouped_ops(context) {
        let Some(first) = group.first() else {
            continue;
        };
        let base_anchor = first.old_range().start;
        let head_anchor = first.new_range().start;

        let mut lines = Vec::new();
        for op in &group {
            for change in diff.iter_changes(op) {
                let text = trim_line_ending(change.value());
                let line = match change.tag() {
                    ChangeTag::Equal => DiffLine::context(
                        text,
                        change.old_index().unwrap_or_default() + 1,
                        change.new_index().unwrap_or_default() + 1,
                    ),
                    ChangeTag::Delete => {
                        DiffLine::removed(text, change.old_index().unwrap_or_default() + 1)
                    }
                    ChangeTag::Insert => {
                        DiffLine::added(text, change.new_index().unwrap_or_default() + 1)
                    }
                };
                lines.push(line);
            }
        }

        if let Some(hunk) = Hunk::from_lines(base_anchor, head_anchor, lines, None) {
            if hunk.has_changes() {
                hunks.push(hunk);
            }
        }
    }
    hunks
}

/// A single hunk covering the whole file: every line Added (new file) or
/// every line Removed (deleted file). Empty text yields nothing.
pub fn whole_file_hunk(text: &str, kind: LineKind) -> Option<Hunk> {
    let lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            match kind {
                LineKind::Removed => DiffLine::removed(line, i + 1),
                LineKind::Added | LineKind::Context => DiffLine::added(line, i + 1),
            }
        })
        .collect();
    Hunk::from_lines(0, 0, lines, None)
}

fn trim_line_ending(value: &str) -> &str {
    let value = value.strip_suffix('\n').unwrap_or(value);
    value.strip_suffix('\r').unwrap_or(value)
}
