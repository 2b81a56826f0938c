//! GitHub REST API access: repository listing, language byte counts, and the
//! fork/exclusion filter applied between them.

mod client;
mod lister;
mod types;

pub use client::{
    GitHubApi, HttpClient, ListingTarget, PER_PAGE, RepoSource, ReqwestClient, check_status,
};
pub use lister::{RepoFilter, list_repositories};
pub use types::{LanguageBytes, Owner, Repository};
