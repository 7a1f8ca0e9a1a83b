#![forbid(unsafe_code)]

//! Aggregate stats derived from a repository list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Repository;

/// Totals and language breakdown across a repository list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_stars: u32,
    pub total_forks: u32,
    pub total_repos: usize,
    /// Repository count per primary language.
    pub languages: BTreeMap<String, u32>,
}

impl ProfileStats {
    /// Aggregate over a repository list.
    #[must_use]
    pub fn from_repositories(repos: &[Repository]) -> Self {
        let mut stats = Self {
            total_repos: repos.len(),
            ..Self::default()
        };
        for repo in repos {
            stats.total_stars += repo.stargazers_count;
            stats.total_forks += repo.forks_count;
            if let Some(language) = &repo.language {
                *stats.languages.entry(language.clone()).or_insert(0) += 1;
            }
        }
        stats
    }

    /// The most frequent languages, count descending, name ascending on
    /// ties, truncated to `limit`.
    #[must_use]
    pub fn top_languages(&self, limit: usize) -> Vec<(String, u32)> {
        let mut ranked: Vec<(String, u32)> = self
            .languages
            .iter()
            .map(|(language, &count)| (language.clone(), count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(limit);
        ranked
    }
}
