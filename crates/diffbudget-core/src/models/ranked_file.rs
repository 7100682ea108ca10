use serde::{Deserialize, Serialize};

/// Review role of a file, derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Source,
    Config,
    Test,
    Generated,
}

/// Inclusion level a file ends up with after budgeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    FullContext,
    ClippedContext,
    Omitted,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullContext => "full_context",
            Self::ClippedContext => "clipped_context",
            Self::Omitted => "omitted",
        }
    }
}

/// A parsed file annotated with its priority.
///
/// `index` points back into the slice that was ranked; the ranker never
/// copies or mutates the underlying `ChangedFile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedFile {
    pub index: usize,
    pub filename: String,
    pub priority_score: i64,
    pub role: FileRole,
    tier: Option<Tier>,
}

impl RankedFile {
    pub fn new(index: usize, filename: impl Into<String>, priority_score: i64, role: FileRole) -> Self {
        Self {
            index,
            filename: filename.into(),
            priority_score,
            role,
            tier: None,
        }
    }

    /// `None` until the allocator has run.
    pub fn tier(&self) -> Option<Tier> {
        self.tier
    }

    /// Settle the tier. The transition is one-way: a file that already
    /// carries a tier keeps it.
    pub fn resolve(mut self, tier: Tier) -> Self {
        debug_assert!(self.tier.is_none(), "tier resolved twice for {}", self.filename);
        if self.tier.is_none() {
            self.tier = Some(tier);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_starts_unresolved() {
        let ranked = RankedFile::new(0, "a.rs", 120, FileRole::Source);
        assert_eq!(ranked.tier(), None);
        let ranked = ranked.resolve(Tier::ClippedContext);
        assert_eq!(ranked.tier(), Some(Tier::ClippedContext));
    }

    #[test]
    fn tier_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Tier::FullContext).unwrap(), "\"full_context\"");
    }
}
