//! Budget allocation: every ranked file gets the best tier that still fits.

mod format;

use std::borrow::Cow;

use diffbudget_core::errors::{BudgetError, EngineError};
use diffbudget_core::models::{
    ChangedFile, CompressionResult, EditKind, FileOutcome, Hunk, RankedFile, Tier,
};
use diffbudget_diff::ContextExtender;
use diffbudget_tokens::{TokenBudget, TokenCounter};
use tracing::debug;

pub use format::{DiffFormatter, CLIPPED_HEADING, OMITTED_HEADING};

/// A file that made it through parsing, with its hunks.
#[derive(Debug, Clone)]
pub struct ParsedFile<'a> {
    pub file: Cow<'a, ChangedFile>,
    pub hunks: Vec<Hunk>,
}

impl<'a> ParsedFile<'a> {
    /// Line counts missing from the provider are filled in from the hunks.
    pub fn new(file: &'a ChangedFile, hunks: Vec<Hunk>) -> Self {
        let added: usize = hunks.iter().map(Hunk::added_count).sum();
        let removed: usize = hunks.iter().map(Hunk::removed_count).sum();
        let file = if file.changed_line_count() == 0 && added + removed > 0 {
            Cow::Owned(file.clone().with_line_counts(added, removed))
        } else {
            Cow::Borrowed(file)
        };
        Self { file, hunks }
    }
}

/// Pack `ranked` files into `budget`, in rank order.
///
/// `overhead` is reserved first; if it does not fit, nothing is processed
/// and `BudgetError::Exhausted` is returned. After that each file is tried
/// as a fully extended block, then as a clipped block, and is otherwise
/// listed by name. A file that does not fit never stops later, smaller
/// files from being tried.
pub fn allocate(
    parsed: &[ParsedFile<'_>],
    ranked: Vec<RankedFile>,
    budget: &mut TokenBudget,
    counter: &TokenCounter,
    extender: &ContextExtender,
    formatter: &DiffFormatter,
    overhead: usize,
) -> Result<CompressionResult, EngineError> {
    if !budget.reserve(overhead) {
        return Err(BudgetError::Exhausted {
            overhead,
            max_tokens: budget.max_tokens(),
        }
        .into());
    }

    let mut full_blocks = Vec::new();
    let mut clipped_blocks = Vec::new();
    let mut result = CompressionResult::default();

    for ranked_file in ranked {
        let Some(entry) = parsed.get(ranked_file.index) else {
            continue;
        };

        let mut placed = None;
        let extended = extender.full(&entry.hunks, extension_text(&entry.file));
        let full = formatter.file_block(&entry.file, &extended);
        let tokens = counter.count_cached(&full)?;
        if budget.reserve(tokens) {
            placed = Some((Tier::FullContext, full, tokens));
        } else {
            let clipped = formatter.file_block(&entry.file, &extender.clipped(&entry.hunks));
            let tokens = counter.count_cached(&clipped)?;
            if budget.reserve(tokens) {
                placed = Some((Tier::ClippedContext, clipped, tokens));
            }
        }

        let (tier, tokens) = match placed {
            Some((Tier::FullContext, block, tokens)) => {
                full_blocks.push(block);
                result.fully_included.push(ranked_file.filename.clone());
                (Tier::FullContext, tokens)
            }
            Some((tier, block, tokens)) => {
                clipped_blocks.push(block);
                result.clipped.push(ranked_file.filename.clone());
                (tier, tokens)
            }
            None => {
                result.omitted_names.push(ranked_file.filename.clone());
                (Tier::Omitted, 0)
            }
        };

        let resolved = ranked_file.resolve(tier);
        debug!(
            file = %resolved.filename,
            tier = tier.as_str(),
            score = resolved.priority_score,
            tokens,
            remaining = budget.remaining(),
            "tier decided"
        );
        result.outcomes.push(FileOutcome {
            filename: resolved.filename,
            tier,
            priority_score: resolved.priority_score,
            tokens,
        });
    }

    result.formatted_text =
        formatter.compose(&full_blocks, &clipped_blocks, &result.omitted_names);
    result.total_tokens_used = budget.consumed();
    Ok(result)
}

/// Text that extra context is drawn from. An added file has no base side.
fn extension_text(file: &ChangedFile) -> Option<&str> {
    match file.edit_kind {
        EditKind::Added => None,
        _ => file.base(),
    }
}
