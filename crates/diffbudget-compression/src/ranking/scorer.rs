use std::borrow::Borrow;
use std::sync::Arc;

use diffbudget_core::config::RankingConfig;
use diffbudget_core::models::{ChangedFile, FileRole, RankedFile};
use diffbudget_core::traits::RoleClassifier;

/// The most frequent language across the change-set. Ties go to the
/// language seen first; files with no known language do not vote.
pub fn main_language<F: Borrow<ChangedFile>>(files: &[F]) -> Option<String> {
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for file in files {
        let Some(language) = file.borrow().language() else {
            continue;
        };
        match tally.iter_mut().find(|(l, _)| *l == language) {
            Some((_, count)) => *count += 1,
            None => tally.push((language, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (language, count) in tally {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((language, count));
        }
    }
    best.map(|(language, _)| language.to_string())
}

/// Scores files and orders them for allocation.
///
/// `score = language bonus + min(added + removed, volume cap) + role adjustment`,
/// sorted descending. The sort is stable, so equal scores keep input order.
#[derive(Clone)]
pub struct FileRanker {
    config: RankingConfig,
    classifier: Arc<dyn RoleClassifier>,
}

impl FileRanker {
    pub fn new(config: RankingConfig, classifier: Arc<dyn RoleClassifier>) -> Self {
        Self { config, classifier }
    }

    pub fn score(&self, file: &ChangedFile, role: FileRole, main_language: Option<&str>) -> i64 {
        let language_bonus = match (file.language(), main_language) {
            (Some(language), Some(main)) if language == main => self.config.main_language_bonus,
            _ => 0,
        };
        let volume = file.changed_line_count().min(self.config.volume_cap);
        let volume = i64::try_from(volume).unwrap_or(i64::MAX);
        language_bonus
            .saturating_add(volume)
            .saturating_add(self.role_adjustment(role))
    }

    fn role_adjustment(&self, role: FileRole) -> i64 {
        match role {
            FileRole::Source => 0,
            FileRole::Config => self.config.config_adjustment,
            FileRole::Test => self.config.test_adjustment,
            FileRole::Generated => self.config.generated_adjustment,
        }
    }

    /// Rank `files`; each `RankedFile::index` points back into `files`.
    pub fn rank<F: Borrow<ChangedFile>>(
        &self,
        files: &[F],
        main_language: Option<&str>,
    ) -> Vec<RankedFile> {
        let mut ranked: Vec<RankedFile> = files
            .iter()
            .enumerate()
            .map(|(index, file)| {
                let file = file.borrow();
                let role = self.classifier.classify(&file.filename);
                let score = self.score(file, role, main_language);
                RankedFile::new(index, file.filename.clone(), score, role)
            })
            .collect();
        ranked.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
        ranked
    }
}

impl std::fmt::Debug for FileRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileRanker")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
