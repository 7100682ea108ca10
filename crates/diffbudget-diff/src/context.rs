//! Reshaping hunks: widen them with surrounding base-text lines, or clip
//! their context down for the degraded tier.

use diffbudget_core::config::ContextConfig;
use diffbudget_core::models::{DiffLine, Hunk};

/// The two hunk shapes the allocator tries, in order: widened, then clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextExtender {
    max_extra_lines: usize,
    clipped_context_lines: usize,
}

impl ContextExtender {
    pub fn new(max_extra_lines: usize, clipped_context_lines: usize) -> Self {
        Self {
            max_extra_lines,
            clipped_context_lines,
        }
    }

    pub fn from_config(config: &ContextConfig) -> Self {
        Self::new(config.max_extra_lines, config.clipped_context_lines)
    }

    /// Hunks for the full-context tier.
    pub fn full(&self, hunks: &[Hunk], base_text: Option<&str>) -> Vec<Hunk> {
        extend_all(hunks, base_text, self.max_extra_lines)
    }

    /// Hunks for the clipped tier.
    pub fn clipped(&self, hunks: &[Hunk]) -> Vec<Hunk> {
        clip_all(hunks, self.clipped_context_lines)
    }
}

impl Default for ContextExtender {
    fn default() -> Self {
        Self::from_config(&ContextConfig::default())
    }
}

/// A copy of `hunk` with up to `max_extra_lines` extra context lines taken
/// from the base text, `ceil(max / 2)` before and the rest after. When a
/// file boundary cuts one side short the remainder goes to the other side.
///
/// With no text the hunk comes back unchanged.
pub fn extend(hunk: &Hunk, full_file_text: Option<&str>, max_extra_lines: usize) -> Hunk {
    let Some(text) = full_file_text else {
        return hunk.clone();
    };
    let base: Vec<&str> = text.lines().collect();
    let (base_anchor, head_anchor) = hunk.anchors();
    let before_room = if base_anchor <= base.len() {
        base_anchor.min(head_anchor)
    } else {
        0
    };
    let after_room = base.len().saturating_sub(hunk.end_base());
    extend_within(hunk, &base, max_extra_lines, before_room, after_room)
}

/// Extend every hunk of one file. Each hunk only grows into the gap left
/// between it and its (already extended) neighbours, so no base line is
/// rendered twice.
pub fn extend_all(hunks: &[Hunk], full_file_text: Option<&str>, max_extra_lines: usize) -> Vec<Hunk> {
    let Some(text) = full_file_text else {
        return hunks.to_vec();
    };
    let base: Vec<&str> = text.lines().collect();

    let mut extended = Vec::with_capacity(hunks.len());
    let mut prev_end_base = 0;
    let mut prev_end_head = 0;
    for (i, hunk) in hunks.iter().enumerate() {
        let (base_anchor, head_anchor) = hunk.anchors();
        let before_room = if base_anchor <= base.len() {
            base_anchor
                .saturating_sub(prev_end_base)
                .min(head_anchor.saturating_sub(prev_end_head))
        } else {
            0
        };
        let after_limit = hunks
            .get(i + 1)
            .map_or(base.len(), |next| next.anchors().0.min(base.len()));
        let after_room = after_limit.saturating_sub(hunk.end_base());

        let widened = extend_within(hunk, &base, max_extra_lines, before_room, after_room);
        prev_end_base = widened.end_base();
        prev_end_head = widened.end_head();
        extended.push(widened);
    }
    extended
}

fn extend_within(
    hunk: &Hunk,
    base: &[&str],
    max_extra_lines: usize,
    before_room: usize,
    after_room: usize,
) -> Hunk {
    // Head numbers after the hunk must stay representable.
    let after_room = after_room.min(usize::MAX - hunk.end_head());
    let before_want = max_extra_lines.div_ceil(2);
    let after_want = max_extra_lines - before_want;
    let mut before = before_want.min(before_room);
    let mut after = after_want.min(after_room);

    // Spill whatever one side could not use onto the other.
    let spare = max_extra_lines - before - after;
    let extra_after = spare.min(after_room - after);
    after += extra_after;
    before += (spare - extra_after).min(before_room - before);

    if before == 0 && after == 0 {
        return hunk.clone();
    }

    let (base_anchor, head_anchor) = hunk.anchors();
    let (end_base, end_head) = (hunk.end_base(), hunk.end_head());

    let mut lines = Vec::with_capacity(hunk.lines.len() + before + after);
    for offset in (0..before).rev() {
        let base_no = base_anchor - offset;
        let head_no = head_anchor - offset;
        lines.push(DiffLine::context(base[base_no - 1], base_no, head_no));
    }
    lines.extend(hunk.lines.iter().cloned());
    for offset in 1..=after {
        let base_no = end_base + offset;
        lines.push(DiffLine::context(base[base_no - 1], base_no, end_head + offset));
    }

    Hunk::from_lines(
        base_anchor - before,
        head_anchor - before,
        lines,
        hunk.section.clone(),
    )
    .unwrap_or_else(|| hunk.clone())
}

/// The clipped form of a hunk: every changed line, at most `n` context lines
/// on either side of each run of changes. Interior context longer than `2n`
/// splits the hunk. A hunk with no changes clips to nothing.
pub fn clip(hunk: &Hunk, n: usize) -> Vec<Hunk> {
    let changes: Vec<usize> = hunk
        .lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.is_change())
        .map(|(i, _)| i)
        .collect();
    let Some((&first, rest)) = changes.split_first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let (mut run_start, mut run_end) = (first, first);
    for &idx in rest {
        if idx - run_end - 1 > 2 * n {
            runs.push((run_start, run_end));
            run_start = idx;
        }
        run_end = idx;
    }
    runs.push((run_start, run_end));

    let last = hunk.lines.len() - 1;
    runs.into_iter()
        .filter_map(|(start, end)| {
            let from = start.saturating_sub(n);
            let to = (end + n).min(last);
            let (base_anchor, head_anchor) = hunk.anchors_at(from);
            Hunk::from_lines(
                base_anchor,
                head_anchor,
                hunk.lines[from..=to].to_vec(),
                hunk.section.clone(),
            )
        })
        .collect()
}

/// `clip` over every hunk of a file.
pub fn clip_all(hunks: &[Hunk], n: usize) -> Vec<Hunk> {
    hunks.iter().flat_map(|h| clip(h, n)).collect()
}

#[cfg(test)]
mod tests {
    use diffbudget_core::models::LineKind;

    use super::*;
    use crate::parser::parse_patch;

    fn numbered(n: usize) -> String {
        (1..=n).map(|i| format!("line {i}\n")).collect()
    }

    fn hunk(patch: &str) -> Hunk {
        parse_patch(patch).unwrap().remove(0)
    }

    #[test]
    fn extend_splits_evenly_around_the_hunk() {
        let base = numbered(20);
        let h = hunk("@@ -10,1 +10,1 @@\n-line 10\n+line ten\n");
        let extended = extend(&h, Some(&base), 4);
        assert_eq!(extended.header(), "@@ -8,5 +8,5 @@");
        assert_eq!(extended.lines[0], DiffLine::context("line 8", 8, 8));
        assert_eq!(extended.lines.last().unwrap(), &DiffLine::context("line 12", 12, 12));
    }

    #[test]
    fn extension_stops_at_the_last_representable_line() {
        let base = numbered(5);
        let h = hunk(&format!("@@ -1 +{} @@\n-line 1\n+x\n", usize::MAX - 1));
        let extended = extend(&h, Some(&base), 4);
        assert_eq!(extended.lines.len(), 3);
        assert_eq!(
            extended.lines.last().unwrap(),
            &DiffLine::context("line 2", 2, usize::MAX)
        );
        assert_eq!(extend_all(std::slice::from_ref(&h), Some(&base), 4), vec![extended]);
    }

    #[test]
    fn odd_budget_favours_before() {
        let base = numbered(20);
        let h = hunk("@@ -10,1 +10,1 @@\n-line 10\n+line ten\n");
        let extended = extend(&h, Some(&base), 3);
        assert_eq!(extended.start_base, 8);
        assert_eq!(extended.end_base(), 11);
    }

    #[test]
    fn boundary_spills_to_other_side() {
        let base = numbered(20);
        let h = hunk("@@ -1,1 +1,1 @@\n-line 1\n+line one\n");
        let extended = extend(&h, Some(&base), 6);
        assert_eq!(extended.start_base, 1);
        assert_eq!(extended.end_base(), 7);

        let tail = hunk("@@ -20,1 +20,1 @@\n-line 20\n+line twenty\n");
        let extended = extend(&tail, Some(&base), 6);
        assert_eq!(extended.start_base, 14);
        assert_eq!(extended.end_base(), 20);
    }

    #[test]
    fn head_numbers_follow_side_offset() {
        let base = numbered(20);
        let h = hunk("@@ -10,1 +10,3 @@\n line 10\n+a\n+b\n");
        let extended = extend(&h, Some(&base), 2);
        let after = extended.lines.last().unwrap();
        assert_eq!(after.base_line, Some(11));
        assert_eq!(after.head_line, Some(13));
    }

    #[test]
    fn missing_text_returns_input() {
        let h = hunk("@@ -10,1 +10,1 @@\n-x\n+y\n");
        assert_eq!(extend(&h, None, 10), h);
    }

    #[test]
    fn extend_all_never_overlaps_neighbours() {
        let base = numbered(20);
        let hunks = parse_patch(
            "@@ -5,1 +5,1 @@\n-line 5\n+five\n@@ -8,1 +8,1 @@\n-line 8\n+eight\n",
        )
        .unwrap();
        let extended = extend_all(&hunks, Some(&base), 10);
        assert!(extended[0].end_base() < extended[1].start_base);

        let mut seen = std::collections::HashSet::new();
        for line in extended.iter().flat_map(|h| &h.lines) {
            if let Some(b) = line.base_line {
                assert!(seen.insert(b), "base line {b} rendered twice");
            }
        }
    }

    #[test]
    fn clip_trims_outer_context() {
        let h = hunk("@@ -1,7 +1,7 @@\n a\n b\n c\n-d\n+D\n e\n f\n g\n");
        let clipped = clip(&h, 1);
        assert_eq!(clipped.len(), 1);
        assert_eq!(clipped[0].header(), "@@ -3,3 +3,3 @@");
        assert_eq!(clipped[0].lines[0].text, "c");
        assert_eq!(clipped[0].lines.last().unwrap().text, "e");
    }

    #[test]
    fn clip_splits_long_interior_context() {
        let h = hunk("@@ -1,8 +1,8 @@\n-a\n+A\n b\n c\n d\n e\n f\n-g\n+G\n h\n");
        let clipped = clip(&h, 2);
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped[0].header(), "@@ -1,3 +1,3 @@");
        assert_eq!(clipped[1].header(), "@@ -5,4 +5,4 @@");
    }

    #[test]
    fn clip_keeps_short_interior_context() {
        let h = hunk("@@ -1,6 +1,6 @@\n-a\n+A\n b\n c\n d\n e\n-f\n+F\n");
        assert_eq!(clip(&h, 2).len(), 1);
    }

    #[test]
    fn context_only_hunk_vanishes() {
        let h = hunk("@@ -1,2 +1,2 @@\n a\n b\n");
        assert!(clip(&h, 2).is_empty());
        assert!(clip_all(&[h], 0).is_empty());
    }

    #[test]
    fn clip_zero_keeps_only_changes() {
        let h = hunk("@@ -1,3 +1,3 @@\n a\n-b\n+B\n c\n");
        let clipped = clip(&h, 0);
        assert_eq!(clipped.len(), 1);
        assert!(clipped[0].lines.iter().all(|l| l.kind != LineKind::Context));
        assert_eq!(clipped[0].header(), "@@ -2,1 +2,1 @@");
    }
}
