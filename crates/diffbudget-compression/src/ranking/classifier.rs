use std::path::Path;

use diffbudget_core::errors::ConfigError;
use diffbudget_core::models::FileRole;
use diffbudget_core::traits::RoleClassifier;
use glob::Pattern;

use crate::filter::compile_globs;

const GENERATED_NAMES: &[&str] = &[
    "Cargo.lock",
    "package-lock.json",
    "npm-shrinkwrap.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "poetry.lock",
    "Pipfile.lock",
    "uv.lock",
    "go.sum",
    "Gemfile.lock",
    "composer.lock",
    "flake.lock",
];

const GENERATED_SUFFIXES: &[&str] = &[".min.js", ".min.css", ".pb.go", "_pb2.py", ".g.dart"];

const TEST_DIRS: &[&str] = &["test", "tests", "spec", "specs", "__tests__", "testdata"];

const CONFIG_EXTENSIONS: &[&str] = &[
    "toml", "yaml", "yml", "json", "ini", "cfg", "conf", "env", "properties", "xml", "plist",
];

const CONFIG_NAMES: &[&str] = &[
    "Dockerfile",
    "Makefile",
    "CMakeLists.txt",
    "Procfile",
    "Jenkinsfile",
    ".env",
    ".gitignore",
    ".gitattributes",
    ".editorconfig",
    ".dockerignore",
];

/// Classifies files by name alone.
///
/// Checked in order: generated (lockfiles, minified and protobuf output,
/// `*.generated.*`, configured globs), test, config, else source.
#[derive(Debug, Clone, Default)]
pub struct PatternClassifier {
    generated: Vec<Pattern>,
}

impl PatternClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also treat files matching any of `globs` as generated.
    pub fn with_generated_globs(globs: &[String]) -> Result<Self, ConfigError> {
        Ok(Self {
            generated: compile_globs(globs, "ranking.generated_globs")?,
        })
    }

    fn is_generated(&self, filename: &str, name: &str) -> bool {
        GENERATED_NAMES.contains(&name)
            || GENERATED_SUFFIXES.iter().any(|s| name.ends_with(s))
            || name.contains(".generated.")
            || self.generated.iter().any(|p| p.matches(filename))
    }
}

fn is_test(filename: &str, name: &str) -> bool {
    let mut dirs = filename.split('/').rev().skip(1);
    if dirs.any(|d| TEST_DIRS.contains(&d)) {
        return true;
    }
    let stem = name.split('.').next().unwrap_or(name);
    let words_match = stem
        .split(['_', '-', '.'])
        .any(|w| matches!(w.to_ascii_lowercase().as_str(), "test" | "tests" | "spec"));
    words_match
        || stem.ends_with("Test")
        || stem.ends_with("Tests")
        || stem.ends_with("Spec")
        || name.contains(".test.")
        || name.contains(".spec.")
}

fn is_config(name: &str) -> bool {
    if CONFIG_NAMES.contains(&name) {
        return true;
    }
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| CONFIG_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

impl RoleClassifier for PatternClassifier {
    fn classify(&self, filename: &str) -> FileRole {
        let name = filename.rsplit('/').next().unwrap_or(filename);
        if self.is_generated(filename, name) {
            FileRole::Generated
        } else if is_test(filename, name) {
            FileRole::Test
        } else if is_config(name) {
            FileRole::Config
        } else {
            FileRole::Source
        }
    }
}
