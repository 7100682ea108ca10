//! Test fixture loader for the change-set scenarios under
//! `test-fixtures/changesets/`.
//!
//! Every fixture is a JSON object with the `ChangedFile` records of one
//! pull request and the outcome the engine is expected to reach.

use std::path::PathBuf;

use diffbudget_core::models::ChangedFile;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One change-set scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangeSetFixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub files: Vec<ChangedFile>,
    pub expected: ExpectedOutcome,
}

/// What the engine should conclude about a fixture, independent of budget.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpectedOutcome {
    pub main_language: Option<String>,
    /// Files dropped before parsing (no content, or filtered).
    pub skipped: Vec<String>,
    /// Files whose patch fails to parse.
    pub unparseable: Vec<String>,
    /// Ranking of the remaining files, best first.
    pub rank_order: Vec<String>,
}

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until the folder shows up.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);
    while !path.join("test-fixtures").join("changesets").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/changesets from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `changesets/<name>.json`.
pub fn load_changeset(name: &str) -> ChangeSetFixture {
    load_fixture(&format!("changesets/{name}.json"))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension().is_some_and(|ext| ext == "json").then_some(path)
        })
        .collect();
    files.sort();
    files
}
