use serde::{Deserialize, Serialize};

/// Role of a line inside a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Context,
    Added,
    Removed,
}

impl LineKind {
    /// The unified-diff prefix character.
    pub fn prefix(self) -> char {
        match self {
            Self::Context => ' ',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }
}

/// One line of a hunk with its absolute position on each side it exists on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: LineKind,
    pub text: String,
    /// 1-based line number in the base file (context and removed lines).
    pub base_line: Option<usize>,
    /// 1-based line number in the head file (context and added lines).
    pub head_line: Option<usize>,
}

impl DiffLine {
    pub fn context(text: impl Into<String>, base_line: usize, head_line: usize) -> Self {
        Self {
            kind: LineKind::Context,
            text: text.into(),
            base_line: Some(base_line),
            head_line: Some(head_line),
        }
    }

    pub fn added(text: impl Into<String>, head_line: usize) -> Self {
        Self {
            kind: LineKind::Added,
            text: text.into(),
            base_line: None,
            head_line: Some(head_line),
        }
    }

    pub fn removed(text: impl Into<String>, base_line: usize) -> Self {
        Self {
            kind: LineKind::Removed,
            text: text.into(),
            base_line: Some(base_line),
            head_line: None,
        }
    }

    /// Absolute line number on the side this line belongs to:
    /// head for context/added lines, base for removed lines.
    pub fn line_number(&self) -> usize {
        match self.kind {
            LineKind::Removed => self.base_line.unwrap_or_default(),
            LineKind::Context | LineKind::Added => self.head_line.unwrap_or_default(),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind != LineKind::Context
    }
}

/// A contiguous block of a unified diff.
///
/// Start/count fields follow `@@ -start,count +start,count @@` semantics:
/// when a side has zero lines its start is the line *before* the change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub start_base: usize,
    pub count_base: usize,
    pub start_head: usize,
    pub count_head: usize,
    /// Text following the closing `@@`, usually the enclosing function.
    pub section: Option<String>,
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    /// Build a hunk from numbered lines. `base_anchor`/`head_anchor` are the
    /// line numbers immediately before the first line on each side.
    /// Returns `None` for an empty line list.
    pub fn from_lines(
        base_anchor: usize,
        head_anchor: usize,
        lines: Vec<DiffLine>,
        section: Option<String>,
    ) -> Option<Self> {
        if lines.is_empty() {
            return None;
        }
        let count_base = lines.iter().filter(|l| l.base_line.is_some()).count();
        let count_head = lines.iter().filter(|l| l.head_line.is_some()).count();
        Some(Self {
            start_base: if count_base > 0 { base_anchor + 1 } else { base_anchor },
            count_base,
            start_head: if count_head > 0 { head_anchor + 1 } else { head_anchor },
            count_head,
            section,
            lines,
        })
    }

    /// Line numbers immediately before the first line of the hunk.
    pub fn anchors(&self) -> (usize, usize) {
        let base = if self.count_base > 0 {
            self.start_base.saturating_sub(1)
        } else {
            self.start_base
        };
        let head = if self.count_head > 0 {
            self.start_head.saturating_sub(1)
        } else {
            self.start_head
        };
        (base, head)
    }

    /// Anchors in effect just before `lines[index]`.
    pub fn anchors_at(&self, index: usize) -> (usize, usize) {
        let (mut base, mut head) = self.anchors();
        for line in &self.lines[..index.min(self.lines.len())] {
            if let Some(b) = line.base_line {
                base = b;
            }
            if let Some(h) = line.head_line {
                head = h;
            }
        }
        (base, head)
    }

    /// Last base line covered by the hunk (equals the anchor when empty).
    pub fn end_base(&self) -> usize {
        self.anchors().0 + self.count_base
    }

    /// Last head line covered by the hunk (equals the anchor when empty).
    pub fn end_head(&self) -> usize {
        self.anchors().1 + self.count_head
    }

    pub fn has_changes(&self) -> bool {
        self.lines.iter().any(DiffLine::is_change)
    }

    pub fn added_count(&self) -> usize {
        self.lines.iter().filter(|l| l.kind == LineKind::Added).count()
    }

    pub fn removed_count(&self) -> usize {
        self.lines.iter().filter(|l| l.kind == LineKind::Removed).count()
    }

    /// The `@@ -a,b +c,d @@` header, counts always spelled out.
    pub fn header(&self) -> String {
        let mut header = format!(
            "@@ -{},{} +{},{} @@",
            self.start_base, self.count_base, self.start_head, self.count_head
        );
        if let Some(section) = &self.section {
            header.push(' ');
            header.push_str(section);
        }
        header
    }
}
