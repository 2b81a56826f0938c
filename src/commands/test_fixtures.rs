//! In-memory GitHub account shared by the command tests.

use std::cell::Cell;

use indexmap::IndexMap;

use crate::error::{LangStatsError, Result};
use crate::github::{LanguageBytes, RepoSource, Repository};

/// Serves a single listing page followed by an empty one, and per-repository
/// language mappings keyed by repository name.
#[derive(Default)]
pub struct FixtureSource {
    repos: Vec<Repository>,
    languages: IndexMap<String, LanguageBytes>,
    fail_languages_for: Option<String>,
    language_calls: Cell<usize>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, name: &str, languages: &[(&str, u64)]) -> Self {
        self.repos.push(Repository::new("octocat", name, false));
        self.languages.insert(
            name.to_string(),
            languages.iter().map(|(k, v)| ((*k).to_string(), *v)).collect(),
        );
        self
    }

    pub fn with_fork(mut self, name: &str, languages: &[(&str, u64)]) -> Self {
        self = self.with_repo(name, languages);
        if let Some(last) = self.repos.last_mut() {
            last.fork = true;
        }
        self
    }

    pub fn failing_languages_for(mut self, name: &str) -> Self {
        self.fail_languages_for = Some(name.to_string());
        self
    }

    pub fn language_calls(&self) -> usize {
        self.language_calls.get()
    }
}

impl RepoSource for FixtureSource {
    fn list_repos_page(&self, page: u32) -> Result<Vec<Repository>> {
        Ok(if page == 1 { self.repos.clone() } else { Vec::new() })
    }

    fn languages(&self, repo: &Repository) -> Result<LanguageBytes> {
        self.language_calls.set(self.language_calls.get() + 1);
        if self.fail_languages_for.as_deref() == Some(repo.name.as_str()) {
            return Err(LangStatsError::Auth {
                url: format!("https://api.github.com/repos/octocat/{}/languages", repo.name),
                status: 401,
            });
        }
        Ok(self.languages.get(&repo.name).cloned().unwrap_or_default())
    }
}
