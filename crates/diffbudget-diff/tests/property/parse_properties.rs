use std::collections::HashSet;

use diffbudget_diff::{clip_all, extend_all, parse_patch, render_patch, synthesize_hunks};
use proptest::prelude::*;

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-c]{0,2}", 0..40).prop_map(|lines| {
        lines.iter().map(|l| format!("{l}\n")).collect()
    })
}

proptest! {
    #[test]
    fn parse_render_parse_is_identity(
        base in text_strategy(),
        head in text_strategy(),
        context in 0usize..4,
    ) {
        let hunks = synthesize_hunks(&base, &head, context);
        let rendered = render_patch(&hunks);
        let reparsed = parse_patch(&rendered).unwrap();
        prop_assert_eq!(&reparsed, &hunks);
        prop_assert_eq!(render_patch(&reparsed), rendered);
    }

    #[test]
    fn clipped_patches_reparse_and_keep_every_change(
        base in text_strategy(),
        head in text_strategy(),
        n in 0usize..4,
    ) {
        let hunks = synthesize_hunks(&base, &head, 5);
        let clipped = clip_all(&hunks, n);
        let reparsed = parse_patch(&render_patch(&clipped)).unwrap();
        prop_assert_eq!(&reparsed, &clipped);

        let changes = |hs: &[diffbudget_core::models::Hunk]| {
            hs.iter().flat_map(|h| &h.lines).filter(|l| l.is_change()).count()
        };
        prop_assert_eq!(changes(&clipped), changes(&hunks));
    }

    #[test]
    fn extension_never_duplicates_line_numbers(
        base in text_strategy(),
        head in text_strategy(),
        context in 0usize..3,
        max_extra in 0usize..12,
    ) {
        let hunks = synthesize_hunks(&base, &head, context);
        let extended = extend_all(&hunks, Some(&base), max_extra);
        let base_lines: Vec<&str> = base.lines().collect();

        let mut seen_base = HashSet::new();
        let mut seen_head = HashSet::new();
        for line in extended.iter().flat_map(|h| &h.lines) {
            if let Some(b) = line.base_line {
                prop_assert!(seen_base.insert(b), "base line {} repeated", b);
                prop_assert_eq!(line.text.as_str(), base_lines[b - 1]);
            }
            if let Some(h) = line.head_line {
                prop_assert!(seen_head.insert(h), "head line {} repeated", h);
            }
        }

        let reparsed = parse_patch(&render_patch(&extended)).unwrap();
        prop_assert_eq!(reparsed, extended);
    }
}
