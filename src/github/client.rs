use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::Config;
use crate::error::{LangStatsError, Result};

use super::types::{LanguageBytes, Repository};

/// Repositories requested per listing page (the API maximum).
pub const PER_PAGE: u32 = 100;

const ACCEPT_HEADER: &str = "application/vnd.github+json";
const USER_AGENT_HEADER: &str = concat!("lang-stats/", env!("CARGO_PKG_VERSION"));

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx status.
    fn get(&self, url: &str) -> Result<String>;
}

/// Production HTTP client using reqwest.
///
/// Every request carries the bearer token and the GitHub JSON media type.
#[derive(Debug)]
pub struct ReqwestClient {
    client: reqwest::blocking::Client,
}

impl ReqwestClient {
    /// Build a client that authenticates with `token`.
    ///
    /// # Errors
    /// Returns an error if the token is not a valid header value or the TLS
    /// backend cannot be initialized.
    pub fn new(token: &str, timeout: Duration) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            LangStatsError::Config("API token contains invalid header characters".to_string())
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HEADER));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_HEADER));

        let client = reqwest::blocking::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| LangStatsError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        tracing::trace!(%url, "GET");
        let response = self.client.get(url).send().map_err(|e| {
            if e.is_timeout() {
                LangStatsError::Network(format!("Request timeout fetching {url}"))
            } else if e.is_connect() {
                LangStatsError::Network(format!("Failed to connect to {url}"))
            } else {
                LangStatsError::Network(format!("Failed to fetch {url}: {e}"))
            }
        })?;

        check_status(url, response.status().as_u16())?;

        response
            .text()
            .map_err(|e| LangStatsError::Network(format!("Failed to read response from {url}: {e}")))
    }
}

/// Map a response status to the error taxonomy: 401/403 are authentication
/// failures, every other non-2xx status is an HTTP failure.
///
/// # Errors
/// Returns `Auth` or `Http` for any status outside 200..=299.
pub fn check_status(url: &str, status: u16) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(LangStatsError::Auth {
            url: url.to_string(),
            status,
        }),
        _ => Err(LangStatsError::Http {
            url: url.to_string(),
            status,
        }),
    }
}

/// Whose repositories the listing endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingTarget {
    /// `/user/repos`, optionally restricted to public repositories.
    AuthenticatedUser { public_only: bool },
    /// `/users/{name}/repos`.
    User(String),
}

impl ListingTarget {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        match &config.account.user {
            Some(user) => Self::User(user.clone()),
            None => Self::AuthenticatedUser {
                public_only: config.account.public_only,
            },
        }
    }
}

/// Read access to a source forge: repository listing pages and per-repository
/// language byte counts.
pub trait RepoSource {
    /// Fetch one page (1-based) of the repository listing.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded.
    fn list_repos_page(&self, page: u32) -> Result<Vec<Repository>>;

    /// Fetch the language byte mapping of one repository.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be decoded.
    fn languages(&self, repo: &Repository) -> Result<LanguageBytes>;
}

/// GitHub REST API v3 source.
#[derive(Debug)]
pub struct GitHubApi<C: HttpClient = ReqwestClient> {
    client: C,
    base_url: String,
    target: ListingTarget,
}

impl<C: HttpClient> GitHubApi<C> {
    #[must_use]
    pub fn new(client: C, base_url: &str, target: ListingTarget) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            target,
        }
    }

    #[must_use]
    pub fn repos_page_url(&self, page: u32) -> String {
        match &self.target {
            ListingTarget::AuthenticatedUser { public_only: true } => format!(
                "{}/user/repos?visibility=public&per_page={PER_PAGE}&page={page}",
                self.base_url
            ),
            ListingTarget::AuthenticatedUser { public_only: false } => {
                format!("{}/user/repos?per_page={PER_PAGE}&page={page}", self.base_url)
            }
            ListingTarget::User(user) => format!(
                "{}/users/{user}/repos?per_page={PER_PAGE}&page={page}",
                self.base_url
            ),
        }
    }

    #[must_use]
    pub fn languages_url(&self, repo: &Repository) -> String {
        format!(
            "{}/repos/{}/{}/languages",
            self.base_url, repo.owner.login, repo.name
        )
    }
}

impl<C: HttpClient> RepoSource for GitHubApi<C> {
    fn list_repos_page(&self, page: u32) -> Result<Vec<Repository>> {
        let body = self.client.get(&self.repos_page_url(page))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn languages(&self, repo: &Repository) -> Result<LanguageBytes> {
        let body = self.client.get(&self.languages_url(repo))?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
