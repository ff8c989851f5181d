//! Hosting API gateway.
//!
//! Normalized issue, comment, and user types plus the capability trait the
//! migration workflow talks to. The GitHub implementation lives in
//! [`github`]; tests substitute an in-memory fake.

pub mod github;

use std::fmt;
use std::future::Future;

use crate::config::RepoRef;
use crate::error::Result;

/// Normalized remote issue data.
#[derive(Debug, Clone)]
pub struct RemoteIssue {
    /// Issue number within its repository.
    pub number: u64,
    pub title: String,
    pub body: String,
    /// Login of the issue's author.
    pub author: String,
    /// Read-only; this tool never changes an issue's state.
    pub state: RemoteStatus,
    pub labels: Vec<String>,
    /// Creation timestamp, preformatted as `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
    /// Web URL to view the issue.
    pub url: String,
    /// Pull requests share the issue numbering space and are never migrated.
    pub is_pull_request: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteStatus {
    Open,
    Closed,
}

impl fmt::Display for RemoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteStatus::Open => write!(f, "open"),
            RemoteStatus::Closed => write!(f, "closed"),
        }
    }
}

/// A comment on a remote issue. Read-only on the source side.
#[derive(Debug, Clone)]
pub struct RemoteComment {
    pub author: String,
    pub body: String,
    /// Creation timestamp, preformatted as `YYYY-MM-DD HH:MM:SS`.
    pub created_at: String,
}

/// A remote user identity.
#[derive(Debug, Clone)]
pub struct RemoteUser {
    pub login: String,
}

/// Outbound issue payload assembled by the request builder.
///
/// Exists only for the duration of one migration and is discarded after
/// the create call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Capability interface over one hosting platform's issue surface.
pub trait IssueHost: Send + Sync {
    fn get_issue(
        &self,
        repo: &RepoRef,
        number: u64,
    ) -> impl Future<Output = Result<RemoteIssue>> + Send;

    /// List issues of `repo`, sorted by creation date descending.
    fn list_issues(&self, repo: &RepoRef) -> impl Future<Output = Result<Vec<RemoteIssue>>> + Send;

    fn list_comments(
        &self,
        repo: &RepoRef,
        number: u64,
    ) -> impl Future<Output = Result<Vec<RemoteComment>>> + Send;

    fn create_issue(
        &self,
        repo: &RepoRef,
        request: &NewIssue,
    ) -> impl Future<Output = Result<RemoteIssue>> + Send;

    fn create_comment(
        &self,
        repo: &RepoRef,
        number: u64,
        body: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    fn add_labels(
        &self,
        repo: &RepoRef,
        number: u64,
        labels: &[String],
    ) -> impl Future<Output = Result<()>> + Send;

    fn get_user(&self, login: &str) -> impl Future<Output = Result<RemoteUser>> + Send;
}
