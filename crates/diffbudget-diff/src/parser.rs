//! Unified-diff parser.
//!
//! Grammar: optional preamble (`diff --git`, `index`, `---`, `+++`, mode and
//! rename lines), then one or more hunks, each `@@ -a[,b] +c[,d] @@[ section]`
//! followed by body lines prefixed with ` `, `+` or `-`. Omitted counts
//! default to 1. `\ No newline at end of file` markers are dropped.

use std::sync::LazyLock;

use diffbudget_core::errors::PatchError;
use diffbudget_core::models::{DiffLine, Hunk};
use regex::Regex;

static HUNK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@(.*)$")
        .expect("hardcoded hunk header regex")
});

const PREAMBLE_PREFIXES: &[&str] = &[
    "diff --git",
    "diff ",
    "index ",
    "--- ",
    "+++ ",
    "new file mode",
    "deleted file mode",
    "similarity index",
    "dissimilarity index",
    "rename from",
    "rename to",
    "copy from",
    "copy to",
    "old mode",
    "new mode",
    "Binary files",
];

/// Parse a unified diff into hunks.
///
/// An empty (or preamble-only) patch yields no hunks. Body lines that are
/// completely empty count as empty context lines, since some providers strip
/// the leading space.
pub fn parse_patch(raw: &str) -> Result<Vec<Hunk>, PatchError> {
    let mut hunks = Vec::new();
    let mut current: Option<HunkBuilder> = None;

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.starts_with("@@") {
            if let Some(builder) = current.take() {
                hunks.push(builder.finish()?);
            }
            current = Some(HunkBuilder::from_header(line, line_no)?);
            continue;
        }

        let Some(builder) = current.as_mut() else {
            if line.is_empty() || is_preamble(line) {
                continue;
            }
            return Err(PatchError::malformed(
                line_no,
                "content before the first hunk header",
            ));
        };

        if line.starts_with('\\') {
            continue;
        }
        // Trailing blank lines after a complete hunk are separators.
        if line.is_empty() && builder.is_complete() {
            continue;
        }
        builder.push(line, line_no)?;
    }

    if let Some(builder) = current {
        hunks.push(builder.finish()?);
    }
    Ok(hunks)
}

fn is_preamble(line: &str) -> bool {
    PREAMBLE_PREFIXES.iter().any(|p| line.starts_with(p))
}

struct HunkBuilder {
    header: String,
    header_line: usize,
    start_base: usize,
    count_base: usize,
    start_head: usize,
    count_head: usize,
    section: Option<String>,
    next_base: usize,
    next_head: usize,
    seen_base: usize,
    seen_head: usize,
    lines: Vec<DiffLine>,
}

impl HunkBuilder {
    fn from_header(line: &str, line_no: usize) -> Result<Self, PatchError> {
        let caps = HUNK_HEADER_RE
            .captures(line)
            .ok_or_else(|| PatchError::malformed(line_no, format!("bad hunk header `{line}`")))?;

        let number = |i: usize, default: usize| -> Result<usize, PatchError> {
            match caps.get(i) {
                Some(m) => m.as_str().parse().map_err(|_| {
                    PatchError::malformed(line_no, format!("number out of range in `{line}`"))
                }),
                None => Ok(default),
            }
        };
        let start_base = number(1, 0)?;
        let count_base = number(2, 1)?;
        let start_head = number(3, 0)?;
        let count_head = number(4, 1)?;

        if (count_base > 0 && start_base == 0) || (count_head > 0 && start_head == 0) {
            return Err(PatchError::malformed(
                line_no,
                format!("line 0 cannot start a non-empty range in `{line}`"),
            ));
        }

        // Every body line advances past the anchor, so the end of each
        // range must be representable.
        let out_of_range = |start: usize, count: usize| start.checked_add(count.max(1)).is_none();
        if out_of_range(start_base, count_base) || out_of_range(start_head, count_head) {
            return Err(PatchError::malformed(
                line_no,
                format!("line number out of range in `{line}`"),
            ));
        }

        let section = caps
            .get(5)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let anchor = |start: usize, count: usize| if count > 0 { start - 1 } else { start };
        Ok(Self {
            header: line.to_string(),
            header_line: line_no,
            start_base,
            count_base,
            start_head,
            count_head,
            section,
            next_base: anchor(start_base, count_base) + 1,
            next_head: anchor(start_head, count_head) + 1,
            seen_base: 0,
            seen_head: 0,
            lines: Vec::new(),
        })
    }

    fn is_complete(&self) -> bool {
        self.seen_base >= self.count_base && self.seen_head >= self.count_head
    }

    fn push(&mut self, line: &str, line_no: usize) -> Result<(), PatchError> {
        let (prefix, text) = match line.chars().next() {
            Some(c) => (c, &line[c.len_utf8()..]),
            None => (' ', ""),
        };
        let diff_line = match prefix {
            ' ' => {
                let l = DiffLine::context(text, self.next_base, self.next_head);
                advance(&mut self.next_base, line_no)?;
                advance(&mut self.next_head, line_no)?;
                self.seen_base += 1;
                self.seen_head += 1;
                l
            }
            '+' => {
                let l = DiffLine::added(text, self.next_head);
                advance(&mut self.next_head, line_no)?;
                self.seen_head += 1;
                l
            }
            '-' => {
                let l = DiffLine::removed(text, self.next_base);
                advance(&mut self.next_base, line_no)?;
                self.seen_base += 1;
                l
            }
            other => {
                return Err(PatchError::malformed(
                    line_no,
                    format!("unknown line prefix `{other}`"),
                ))
            }
        };
        self.lines.push(diff_line);
        Ok(())
    }

    fn finish(self) -> Result<Hunk, PatchError> {
        if self.lines.is_empty() {
            return Err(PatchError::malformed(self.header_line, "hunk has no lines"));
        }
        if self.seen_base != self.count_base || self.seen_head != self.count_head {
            return Err(PatchError::InconsistentLineCount {
                header: self.header,
                expected_base: self.count_base,
                actual_base: self.seen_base,
                expected_head: self.count_head,
                actual_head: self.seen_head,
            });
        }
        Ok(Hunk {
            start_base: self.start_base,
            count_base: self.count_base,
            start_head: self.start_head,
            count_head: self.count_head,
            section: self.section,
            lines: self.lines,
        })
    }
}

fn advance(next: &mut usize, line_no: usize) -> Result<(), PatchError> {
    *next = next
        .checked_add(1)
        .ok_or_else(|| PatchError::malformed(line_no, "line number out of range"))?;
    Ok(())
}
