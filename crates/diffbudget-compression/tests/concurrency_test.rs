use std::sync::Arc;

use diffbudget_compression::CompressionEngine;
use diffbudget_core::EngineConfig;
use diffbudget_fixtures::load_changeset;
use rayon::prelude::*;

#[test]
fn concurrent_requests_share_one_engine() {
    let mut config = EngineConfig::default();
    config.budget.max_tokens = 700;
    config.budget.overhead_reserve = 50;
    let engine = Arc::new(CompressionEngine::new(config).unwrap());
    let fixture = load_changeset("mixed_languages");

    let expected = engine.compress(&fixture.files).unwrap();
    let results: Vec<_> = (0..32)
        .into_par_iter()
        .map(|_| engine.compress(&fixture.files).unwrap())
        .collect();

    for result in &results {
        assert_eq!(result.formatted_text, expected.formatted_text);
        assert_eq!(result.outcomes, expected.outcomes);
        assert!(result.total_tokens_used <= 700);
    }
}

#[test]
fn independent_change_sets_in_parallel() {
    let engine = CompressionEngine::new(EngineConfig::default()).unwrap();
    let mixed = load_changeset("mixed_languages");
    let malformed = load_changeset("malformed");

    let (a, b) = rayon::join(
        || engine.compress(&mixed.files).unwrap(),
        || engine.compress(&malformed.files).unwrap(),
    );
    assert_eq!(a, engine.compress(&mixed.files).unwrap());
    assert_eq!(b, engine.compress(&malformed.files).unwrap());
    assert_eq!(b.diagnostics.unparseable.len(), 1);
}
