use std::collections::HashSet;
use std::sync::Arc;

use diffbudget_compression::{CompressionEngine, FileRanker, PatternClassifier};
use diffbudget_core::config::RankingConfig;
use diffbudget_core::models::{ChangedFile, EditKind, Tier};
use diffbudget_core::EngineConfig;
use diffbudget_tokens::CharTokenizer;
use proptest::prelude::*;

fn change_set() -> impl Strategy<Value = Vec<ChangedFile>> {
    let file = (0usize..4, 1usize..6, 0usize..12);
    prop::collection::vec(file, 0..10).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (ext, changes, context))| {
                let ext = ["rs", "py", "toml", "go"][ext];
                let name = format!("src/file_{i}.{ext}");
                let mut base = String::new();
                let mut head = String::new();
                for c in 0..context {
                    base.push_str(&format!("ctx {c}\n"));
                    head.push_str(&format!("ctx {c}\n"));
                }
                for c in 0..changes {
                    base.push_str(&format!("old {i} {c}\n"));
                    head.push_str(&format!("new {i} {c}\n"));
                }
                ChangedFile::from_contents(name, EditKind::Modified, base, head)
            })
            .collect()
    })
}

fn engine(max_tokens: usize, overhead: usize) -> CompressionEngine {
    let mut config = EngineConfig::default();
    config.budget.max_tokens = max_tokens;
    config.budget.overhead_reserve = overhead;
    CompressionEngine::with_tokenizer(config, Arc::new(CharTokenizer)).unwrap()
}

proptest! {
    #[test]
    fn budget_is_conserved(files in change_set(), max_tokens in 1usize..2_000, overhead in 0usize..100) {
        prop_assume!(overhead <= max_tokens);
        let result = engine(max_tokens, overhead).compress(&files).unwrap();
        prop_assert!(result.total_tokens_used <= max_tokens);
        let used: usize = result.outcomes.iter().map(|o| o.tokens).sum();
        prop_assert_eq!(used + overhead, result.total_tokens_used);
    }

    #[test]
    fn every_file_lands_in_exactly_one_tier(files in change_set(), max_tokens in 1usize..2_000) {
        let result = engine(max_tokens, 0).compress(&files).unwrap();
        prop_assert_eq!(result.outcomes.len(), files.len());
        prop_assert_eq!(
            result.fully_included_count() + result.clipped_count() + result.omitted_count(),
            files.len()
        );
        let names: HashSet<&str> = result.outcomes.iter().map(|o| o.filename.as_str()).collect();
        prop_assert_eq!(names.len(), files.len());
        for outcome in &result.outcomes {
            prop_assert!(result.formatted_text.contains(&outcome.filename));
            if outcome.tier == Tier::Omitted {
                prop_assert_eq!(outcome.tokens, 0);
            }
        }
    }

    #[test]
    fn ranking_is_stable(files in change_set()) {
        let ranker = FileRanker::new(RankingConfig::default(), Arc::new(PatternClassifier::new()));
        let ranked = ranker.rank(&files, Some("rust"));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].priority_score >= pair[1].priority_score);
            if pair[0].priority_score == pair[1].priority_score {
                prop_assert!(pair[0].index < pair[1].index);
            }
        }
        prop_assert_eq!(ranker.rank(&files, Some("rust")), ranked);
    }
}
