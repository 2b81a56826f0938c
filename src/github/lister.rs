use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LangStatsError, Result};

use super::client::RepoSource;
use super::types::Repository;

/// Fetch every repository visible through `source`.
///
/// Pages are requested in order starting at 1; the first empty page ends the
/// listing. Any failed page aborts the whole listing.
///
/// # Errors
/// Returns the first error reported by `source`.
pub fn list_repositories(source: &impl RepoSource) -> Result<Vec<Repository>> {
    let mut repos = Vec::new();
    let mut page = 1;

    loop {
        let batch = source.list_repos_page(page)?;
        if batch.is_empty() {
            break;
        }
        tracing::debug!(page, count = batch.len(), "fetched repository page");
        repos.extend(batch);
        page += 1;
    }

    tracing::info!(total = repos.len(), pages = page, "listed repositories");
    Ok(repos)
}

/// Drops forks and repositories whose name matches an exclude pattern.
#[derive(Debug, Clone)]
pub struct RepoFilter {
    patterns: Vec<String>,
    exclude: GlobSet,
}

impl Default for RepoFilter {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            exclude: GlobSet::empty(),
        }
    }
}

impl RepoFilter {
    /// Compile the exclude patterns. A plain repository name matches only itself.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid glob.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LangStatsError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude = builder
            .build()
            .map_err(|e| LangStatsError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            patterns: exclude_patterns.to_vec(),
            exclude,
        })
    }

    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.is_match(name)
    }

    #[must_use]
    pub fn should_include(&self, repo: &Repository) -> bool {
        !repo.fork && !self.is_excluded(&repo.name)
    }

    /// Exclude patterns that match none of `repos`, in configuration order.
    #[must_use]
    pub fn unused_patterns(&self, repos: &[Repository]) -> Vec<&str> {
        let mut used = vec![false; self.patterns.len()];
        for repo in repos {
            for index in self.exclude.matches(&repo.name) {
                used[index] = true;
            }
        }
        self.patterns
            .iter()
            .zip(used)
            .filter(|(_, used)| !used)
            .map(|(pattern, _)| pattern.as_str())
            .collect()
    }

    /// Keep the repositories that pass the filter, preserving their order.
    #[must_use]
    pub fn apply(&self, repos: Vec<Repository>) -> Vec<Repository> {
        repos
            .into_iter()
            .filter(|repo| {
                let keep = self.should_include(repo);
                if !keep {
                    tracing::debug!(repo = %repo.full_name(), fork = repo.fork, "skipping repository");
                }
                keep
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "lister_tests.rs"]
mod tests;
