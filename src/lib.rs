pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod migrate;
pub mod prompt;
pub mod remote;
pub mod scan;

pub use config::{MigrationConfig, RepoRef, Settings};
pub use error::{MigratronError, Result};
pub use migrate::{MigrationOutcome, Migrator, SKIP_LABEL};
pub use remote::{IssueHost, NewIssue, RemoteComment, RemoteIssue, RemoteStatus, RemoteUser};
