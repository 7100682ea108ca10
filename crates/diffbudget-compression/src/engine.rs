use std::sync::Arc;

use diffbudget_core::config::EngineConfig;
use diffbudget_core::errors::{error_code, BudgetError, EngineError, ErrorCode};
use diffbudget_core::models::{ChangedFile, CompressionResult, Diagnostics, FileDiagnostic};
use diffbudget_core::traits::{RoleClassifier, Tokenizer};
use diffbudget_diff::{ContextExtender, HunkSource};
use diffbudget_tokens::{TokenBudget, TokenCounter};
use tracing::{debug, info, info_span, warn};

use crate::allocator::{self, DiffFormatter, ParsedFile};
use crate::filter::{self, FileFilter};
use crate::ranking::{main_language, FileRanker, PatternClassifier};

/// Compresses a change-set into budgeted text.
///
/// Holds only immutable configuration, the role classifier and a shared
/// token cache. Each `compress` call gets its own `TokenBudget`, so one
/// engine can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct CompressionEngine {
    config: EngineConfig,
    counter: TokenCounter,
    filter: FileFilter,
    source: HunkSource,
    ranker: FileRanker,
    extender: ContextExtender,
    formatter: DiffFormatter,
}

impl CompressionEngine {
    /// Build an engine using the tokenizer named in `config.tokenizer`.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let counter = TokenCounter::from_config(&config.tokenizer)?;
        Self::assemble(config, counter)
    }

    /// Build an engine around a caller-supplied tokenizer.
    pub fn with_tokenizer(
        config: EngineConfig,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let counter = TokenCounter::new(tokenizer, config.tokenizer.cache_capacity);
        Self::assemble(config, counter)
    }

    fn assemble(config: EngineConfig, counter: TokenCounter) -> Result<Self, EngineError> {
        let classifier = PatternClassifier::with_generated_globs(&config.ranking.generated_globs)?;
        Ok(Self {
            filter: FileFilter::from_config(&config.filter)?,
            source: HunkSource::from_config(&config.context),
            ranker: FileRanker::new(config.ranking.clone(), Arc::new(classifier)),
            extender: ContextExtender::from_config(&config.context),
            formatter: DiffFormatter::from_config(&config.output),
            counter,
            config,
        })
    }

    /// Replace the default pattern classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn RoleClassifier>) -> Self {
        self.ranker = FileRanker::new(self.config.ranking.clone(), classifier);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn counter(&self) -> &TokenCounter {
        &self.counter
    }

    pub fn formatter(&self) -> &DiffFormatter {
        &self.formatter
    }

    /// Filter, parse, rank and pack `files` into the configured budget.
    ///
    /// Files with no content, filtered files and unparseable patches are
    /// left out and reported in `diagnostics`; every other file lands in
    /// exactly one tier. Only an overhead reserve larger than the budget or
    /// a tokenizer failure fails the whole call.
    pub fn compress(&self, files: &[ChangedFile]) -> Result<CompressionResult, EngineError> {
        let max_tokens = self.config.budget.max_tokens;
        let overhead = self.config.budget.overhead_reserve;
        let span = info_span!("compress", files = files.len(), max_tokens);
        let _guard = span.enter();

        if overhead > max_tokens {
            return Err(BudgetError::Exhausted {
                overhead,
                max_tokens,
            }
            .into());
        }

        let mut diagnostics = Diagnostics::default();
        let mut parsed = Vec::with_capacity(files.len());
        for file in files {
            if !file.has_content() {
                warn!(file = %file.filename, "dropping file with no patch and no content");
                diagnostics.skipped.push(FileDiagnostic {
                    filename: file.filename.clone(),
                    code: error_code::EMPTY_CONTENT.to_string(),
                    message: "no patch and no file content".to_string(),
                });
                continue;
            }
            if let Some(reason) = self.filter.skip_reason(&file.filename) {
                debug!(file = %file.filename, %reason, "filtered");
                diagnostics.skipped.push(FileDiagnostic {
                    filename: file.filename.clone(),
                    code: filter::FILTERED.to_string(),
                    message: reason,
                });
                continue;
            }
            match self.source.parse_file(file) {
                Ok(hunks) => parsed.push(ParsedFile::new(file, hunks)),
                Err(err) => {
                    warn!(
                        file = %file.filename,
                        code = err.error_code(),
                        error = %err,
                        "unparseable patch, file skipped"
                    );
                    diagnostics.unparseable.push(FileDiagnostic {
                        filename: file.filename.clone(),
                        code: err.error_code().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        // Every changed file votes, including ones dropped above.
        let main = main_language(files);
        let views: Vec<&ChangedFile> = parsed.iter().map(|p| p.file.as_ref()).collect();
        let ranked = self.ranker.rank(&views, main.as_deref());
        debug!(main_language = ?main, ranked = ranked.len(), "files ranked");

        let mut budget = TokenBudget::new(max_tokens);
        let mut result = allocator::allocate(
            &parsed,
            ranked,
            &mut budget,
            &self.counter,
            &self.extender,
            &self.formatter,
            overhead,
        )?;
        result.diagnostics = diagnostics;

        info!(
            full = result.fully_included_count(),
            clipped = result.clipped_count(),
            omitted = result.omitted_count(),
            skipped = result.diagnostics.skipped.len(),
            unparseable = result.diagnostics.unparseable.len(),
            tokens = result.total_tokens_used,
            "compression finished"
        );
        Ok(result)
    }
}
