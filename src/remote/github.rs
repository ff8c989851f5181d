//! GitHub gateway implementation.

use octocrab::Octocrab;
use octocrab::models::IssueState;
use octocrab::models::issues::{Comment, Issue};
use octocrab::params::issues::Sort;
use octocrab::params::{Direction, State};

use crate::config::RepoRef;
use crate::error::{MigratronError, Result};

use super::{IssueHost, NewIssue, RemoteComment, RemoteIssue, RemoteStatus, RemoteUser};

/// Cap on the number of issues a repository listing fetches.
pub const MAX_LISTED_ISSUES: usize = 1000;

/// GitHub caps list endpoints at 100 results per page.
const PAGE_SIZE: u8 = 100;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// GitHub-backed issue host.
pub struct GitHubHost {
    client: Octocrab,
}

impl GitHubHost {
    pub fn new(token: &str) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| MigratronError::Auth(format!("Failed to create GitHub client: {}", e)))?;

        Ok(GitHubHost { client })
    }
}

fn convert_issue(issue: Issue) -> RemoteIssue {
    let state = match issue.state {
        IssueState::Closed => RemoteStatus::Closed,
        _ => RemoteStatus::Open,
    };

    RemoteIssue {
        number: issue.number,
        title: issue.title,
        body: issue.body.unwrap_or_default(),
        author: issue.user.login,
        state,
        labels: issue.labels.into_iter().map(|l| l.name).collect(),
        created_at: issue.created_at.format(TIMESTAMP_FORMAT).to_string(),
        url: issue.html_url.to_string(),
        is_pull_request: issue.pull_request.is_some(),
    }
}

fn convert_comment(comment: Comment) -> RemoteComment {
    RemoteComment {
        author: comment.user.login,
        body: comment.body.unwrap_or_default(),
        created_at: comment.created_at.format(TIMESTAMP_FORMAT).to_string(),
    }
}

impl IssueHost for GitHubHost {
    async fn get_issue(&self, repo: &RepoRef, number: u64) -> Result<RemoteIssue> {
        let issue = self
            .client
            .issues(&repo.org, &repo.name)
            .get(number)
            .await
            .map_err(|e| {
                if e.to_string().contains("404") {
                    MigratronError::IssueNotFound(format!("{}#{}", repo, number))
                } else {
                    MigratronError::Api(format!("GitHub API error: {}", e))
                }
            })?;

        Ok(convert_issue(issue))
    }

    async fn list_issues(&self, repo: &RepoRef) -> Result<Vec<RemoteIssue>> {
        let mut page = self
            .client
            .issues(&repo.org, &repo.name)
            .list()
            .state(State::Open)
            .sort(Sort::Created)
            .direction(Direction::Descending)
            .per_page(PAGE_SIZE)
            .send()
            .await
            .map_err(|e| MigratronError::Api(format!("Failed to list issues for {}: {}", repo, e)))?;

        let mut issues = Vec::new();
        loop {
            let next = page.next.clone();
            issues.extend(page.items.into_iter().map(convert_issue));

            if issues.len() >= MAX_LISTED_ISSUES {
                issues.truncate(MAX_LISTED_ISSUES);
                break;
            }

            match self.client.get_page::<Issue>(&next).await.map_err(|e| {
                MigratronError::Api(format!("Failed to list issues for {}: {}", repo, e))
            })? {
                Some(next_page) => page = next_page,
                None => break,
            }
        }

        Ok(issues)
    }

    async fn list_comments(&self, repo: &RepoRef, number: u64) -> Result<Vec<RemoteComment>> {
        let page = self
            .client
            .issues(&repo.org, &repo.name)
            .list_comments(number)
            .per_page(PAGE_SIZE)
            .send()
            .await
            .map_err(|e| {
                MigratronError::Api(format!(
                    "Failed to list comments for {}#{}: {}",
                    repo, number, e
                ))
            })?;

        let comments = self.client.all_pages(page).await.map_err(|e| {
            MigratronError::Api(format!(
                "Failed to list comments for {}#{}: {}",
                repo, number, e
            ))
        })?;

        Ok(comments.into_iter().map(convert_comment).collect())
    }

    async fn create_issue(&self, repo: &RepoRef, request: &NewIssue) -> Result<RemoteIssue> {
        let handler = self.client.issues(&repo.org, &repo.name);

        let mut builder = handler.create(&request.title).body(&request.body);
        if !request.labels.is_empty() {
            builder = builder.labels(request.labels.clone());
        }

        let issue = builder.send().await.map_err(|e| {
            MigratronError::Api(format!("Failed to create issue in {}: {}", repo, e))
        })?;

        Ok(convert_issue(issue))
    }

    async fn create_comment(&self, repo: &RepoRef, number: u64, body: &str) -> Result<()> {
        self.client
            .issues(&repo.org, &repo.name)
            .create_comment(number, body)
            .await
            .map_err(|e| {
                MigratronError::Api(format!(
                    "Failed to comment on {}#{}: {}",
                    repo, number, e
                ))
            })?;

        Ok(())
    }

    async fn add_labels(&self, repo: &RepoRef, number: u64, labels: &[String]) -> Result<()> {
        self.client
            .issues(&repo.org, &repo.name)
            .add_labels(number, labels)
            .await
            .map_err(|e| {
                MigratronError::Api(format!("Failed to label {}#{}: {}", repo, number, e))
            })?;

        Ok(())
    }

    async fn get_user(&self, login: &str) -> Result<RemoteUser> {
        let profile = self
            .client
            .users(login)
            .profile()
            .await
            .map_err(|e| {
                if e.to_string().contains("404") {
                    MigratronError::Api(format!("GitHub user '{}' not found", login))
                } else {
                    MigratronError::Api(format!("GitHub API error: {}", e))
                }
            })?;

        Ok(RemoteUser {
            login: profile.login,
        })
    }
}
