use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::github::{LanguageBytes, RepoSource, Repository};

/// Global language → cumulative byte count mapping.
///
/// Languages keep the order in which they were first seen. A language that no
/// repository reported is simply absent (zero bytes).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LanguageTotals {
    bytes: IndexMap<String, u64>,
    repositories: usize,
}

impl LanguageTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one repository's language mapping into the totals.
    pub fn add_repository(&mut self, languages: &LanguageBytes) {
        for (language, bytes) in languages {
            self.add(language, *bytes);
        }
        self.repositories += 1;
    }

    pub fn add(&mut self, language: &str, bytes: u64) {
        let entry = self.bytes.entry(language.to_string()).or_insert(0);
        *entry = entry.saturating_add(bytes);
    }

    #[must_use]
    pub fn get(&self, language: &str) -> u64 {
        self.bytes.get(language).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.bytes.values().fold(0, |acc, b| acc.saturating_add(*b))
    }

    /// Number of repositories merged so far.
    #[must_use]
    pub const fn repositories(&self) -> usize {
        self.repositories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// True when at least one byte was attributed to some language.
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.total_bytes() > 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.bytes.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LanguageTotals {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (language, bytes) in iter {
            totals.add(&language.into(), bytes);
        }
        totals
    }
}

/// Fetch the language mapping of every repository and accumulate the totals.
///
/// Repositories are visited one at a time; `on_fetched` runs after each one.
///
/// # Errors
/// Returns the first error reported by `source`; no partial totals are returned.
pub fn aggregate_languages(
    source: &impl RepoSource,
    repos: &[Repository],
    mut on_fetched: impl FnMut(&Repository),
) -> Result<LanguageTotals> {
    let mut totals = LanguageTotals::new();

    for repo in repos {
        let languages = source.languages(repo)?;
        tracing::debug!(repo = %repo.full_name(), languages = languages.len(), "fetched languages");
        totals.add_repository(&languages);
        on_fetched(repo);
    }

    tracing::info!(
        repositories = totals.repositories(),
        languages = totals.len(),
        bytes = totals.total_bytes(),
        "aggregated language totals"
    );
    Ok(totals)
}

#[cfg(test)]
#[path = "totals_tests.rs"]
mod tests;
