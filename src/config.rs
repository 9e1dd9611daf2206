use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TriageError};

/// An `owner/name` pair identifying a single GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(TriageError::InvalidRepo(s.to_string())),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub repo: RepoRef,
    pub prefix: String,
}

impl Config {
    pub fn new(repo: &str, prefix: &str) -> Result<Self> {
        Ok(Self {
            repo: repo.parse()?,
            prefix: prefix.to_string(),
        })
    }

    /// Full label name for an operator-typed suffix.
    pub fn label_for(&self, suffix: &str) -> String {
        format!("{}/{suffix}", self.prefix)
    }
}
