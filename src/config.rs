//! Environment-derived settings and per-run migration configuration.
//!
//! Everything is resolved once at startup and passed by reference into the
//! workflow; there is no process-wide mutable state.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::{MigratronError, Result};

pub const ENV_TOKEN: &str = "MIGRATRON_TOKEN";
pub const ENV_FROM_REPO: &str = "MIGRATRON_FROM_REPO";
pub const ENV_TO_REPO: &str = "MIGRATRON_TO_REPO";

/// An (organization, name) pair identifying a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub org: String,
    pub name: String,
}

impl FromStr for RepoRef {
    type Err = MigratronError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(MigratronError::InvalidRepo(s.to_string()));
        }

        Ok(RepoRef {
            org: parts[0].to_string(),
            name: parts[1].to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.org, self.name)
    }
}

/// Startup settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: String,
    pub from_repo: RepoRef,
    pub to_repo: RepoRef,
}

impl Settings {
    /// Read `MIGRATRON_TOKEN`, `MIGRATRON_FROM_REPO`, and `MIGRATRON_TO_REPO`.
    ///
    /// Both repositories must be in strict `org/name` format; any other shape
    /// aborts before a network call is made.
    pub fn from_env() -> Result<Self> {
        let token = require_env(ENV_TOKEN)?;
        let from_repo = parse_repo_env(ENV_FROM_REPO)?;
        let to_repo = parse_repo_env(ENV_TO_REPO)?;

        Ok(Settings {
            token,
            from_repo,
            to_repo,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(MigratronError::Config(format!("{} is not set", name))),
    }
}

fn parse_repo_env(name: &str) -> Result<RepoRef> {
    let value = require_env(name)?;
    value.parse().map_err(|_| {
        MigratronError::Config(format!(
            "{} is not in org/name format: '{}'",
            name, value
        ))
    })
}

/// Per-run migration configuration from command flags.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    /// The operator's GitHub login.
    pub login: String,
    /// Label applied to a source issue once it has been migrated.
    pub migrated_label: String,
    /// Label applied to every issue created as result of an import.
    pub imported_label: String,
}
