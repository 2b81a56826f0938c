use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Language name to byte count, in the order the API reports them.
pub type LanguageBytes = IndexMap<String, u64>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// One entry of the repository listing. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
    pub owner: Owner,
}

impl Repository {
    #[must_use]
    pub fn new(owner: impl Into<String>, name: impl Into<String>, fork: bool) -> Self {
        Self {
            name: name.into(),
            fork,
            owner: Owner {
                login: owner.into(),
            },
        }
    }

    /// `owner/name`, as shown in log output.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
