use std::sync::Arc;

use diffbudget_core::traits::Tokenizer;
use diffbudget_tokens::{CharTokenizer, RatioTokenizer, TiktokenTokenizer, TokenBudget, TokenCounter};
use proptest::prelude::*;

proptest! {
    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let counter = TokenCounter::new(Arc::new(TiktokenTokenizer::cl100k().unwrap()), 100);
        let uncached = counter.count(&s).unwrap();
        let cached = counter.count_cached(&s).unwrap();
        prop_assert_eq!(uncached, cached);
    }

    #[test]
    fn counting_is_deterministic(s in ".{0,200}") {
        let t = TiktokenTokenizer::cl100k().unwrap();
        prop_assert_eq!(t.count(&s).unwrap(), t.count(&s).unwrap());
    }

    #[test]
    fn char_tokenizer_is_additive(a in ".{0,100}", b in ".{0,100}") {
        let t = CharTokenizer;
        let combined = format!("{}{}", a, b);
        prop_assert_eq!(
            t.count(&combined).unwrap(),
            t.count(&a).unwrap() + t.count(&b).unwrap()
        );
    }

    #[test]
    fn ratio_never_exceeds_chars(s in ".{0,200}", ratio in 1usize..10) {
        let chars = CharTokenizer.count(&s).unwrap();
        let estimate = RatioTokenizer::new(ratio).count(&s).unwrap();
        prop_assert!(estimate <= chars);
        prop_assert!(estimate * ratio >= chars);
    }

    #[test]
    fn budget_never_overcommits(max in 0usize..500, asks in prop::collection::vec(0usize..200, 0..20)) {
        let mut budget = TokenBudget::new(max);
        let mut committed = 0usize;
        for ask in asks {
            let before = budget.consumed();
            if budget.reserve(ask) {
                committed += ask;
            } else {
                prop_assert_eq!(budget.consumed(), before);
            }
            prop_assert!(budget.consumed() <= max);
        }
        prop_assert_eq!(budget.consumed(), committed);
        prop_assert_eq!(budget.remaining(), max - committed);
    }
}
