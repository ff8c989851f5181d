//! Per-issue migration workflow and the batch driver.
//!
//! The workflow is strictly sequential and every decision belongs to the
//! operator: the orchestrator fetches, displays, prompts, and only writes
//! to the destination (and then the source) after the corresponding
//! confirmation comes back affirmative.

pub mod collate;
pub mod labels;
pub mod request;

#[cfg(test)]
pub(crate) mod test_support;

pub use collate::collate_comments;
pub use labels::sync_labels;
pub use request::build_request;

use owo_colors::OwoColorize;

use crate::config::{MigrationConfig, RepoRef};
use crate::editor::Editor;
use crate::error::{MigratronError, Result};
use crate::prompt::Prompter;
use crate::remote::{IssueHost, RemoteIssue};

/// Label issue authors apply to permanently opt out of migration.
pub const SKIP_LABEL: &str = "migration/selfservice";

/// How one issue's workflow ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// Destination issue created, source commented and labeled.
    Migrated { url: String },
    /// The operator declined a gate; nothing was written anywhere.
    Declined,
}

/// Drives the migration of issues from one repository to another.
pub struct Migrator<'a, H, P, E> {
    host: &'a H,
    prompt: &'a P,
    editor: &'a E,
    config: &'a MigrationConfig,
    from: &'a RepoRef,
    to: &'a RepoRef,
}

impl<'a, H: IssueHost, P: Prompter, E: Editor> Migrator<'a, H, P, E> {
    pub fn new(
        host: &'a H,
        prompt: &'a P,
        editor: &'a E,
        config: &'a MigrationConfig,
        from: &'a RepoRef,
        to: &'a RepoRef,
    ) -> Self {
        Migrator {
            host,
            prompt,
            editor,
            config,
            from,
            to,
        }
    }

    /// Migrate a single issue by number.
    ///
    /// Pull requests and opted-out issues are rejected outright, before
    /// any prompt and with zero writes.
    pub async fn migrate_issue(&self, number: u64) -> Result<MigrationOutcome> {
        let issue = self.host.get_issue(self.from, number).await?;

        if issue.is_pull_request {
            return Err(MigratronError::PullRequest(number));
        }
        if issue.labels.iter().any(|l| l == SKIP_LABEL) {
            return Err(MigratronError::OptedOut {
                number,
                label: SKIP_LABEL.to_string(),
            });
        }

        self.migrate_one(&issue).await
    }

    /// Migrate every eligible issue of the source repository, newest first.
    ///
    /// Pull requests never qualify; issues carrying the opt-out label or
    /// the migrated marker are skipped without side effects. The first
    /// unrecoverable error halts the whole batch.
    pub async fn migrate_all(&self) -> Result<()> {
        let issues = self.host.list_issues(self.from).await?;

        for issue in &issues {
            if issue.is_pull_request {
                continue;
            }
            if issue
                .labels
                .iter()
                .any(|l| l == SKIP_LABEL || *l == self.config.migrated_label)
            {
                println!("skipped: {}", issue.number);
                continue;
            }

            self.migrate_one(issue).await?;
        }

        println!("Completed all issues!");

        Ok(())
    }

    /// The per-issue workflow: display, confirm import, build the request,
    /// confirm migration, create, then record provenance on the source.
    ///
    /// Write ordering is fixed: create destination, comment on source,
    /// label source. A crash mid-sequence can leave the destination issue
    /// without source markers, but never a marked source without a
    /// destination.
    async fn migrate_one(&self, issue: &RemoteIssue) -> Result<MigrationOutcome> {
        let comments = self.host.list_comments(self.from, issue.number).await?;

        print_summary(issue);

        if !self.prompt.confirm("Import Issue")? {
            return Ok(MigrationOutcome::Declined);
        }

        let request = build_request(
            self.prompt,
            self.editor,
            issue,
            &comments,
            &self.config.imported_label,
        )?;

        if !self.prompt.confirm("Migrate Resource")? {
            return Ok(MigrationOutcome::Declined);
        }

        let created = self.host.create_issue(self.to, &request).await?;
        // Re-fetch for the canonical URL the provenance comment points at.
        let destination = self.host.get_issue(self.to, created.number).await?;

        // The comment is attributed to whoever owns the token; resolving the
        // login first surfaces a bad --login before the source is touched.
        self.host.get_user(&self.config.login).await?;

        let provenance = format!("Migrated to {}.", destination.url);
        self.host
            .create_comment(self.from, issue.number, &provenance)
            .await?;

        self.host
            .add_labels(
                self.from,
                issue.number,
                std::slice::from_ref(&self.config.migrated_label),
            )
            .await?;

        print_success(issue.number, &destination.url);

        Ok(MigrationOutcome::Migrated {
            url: destination.url,
        })
    }
}

fn print_summary(issue: &RemoteIssue) {
    println!("-------------------------------");
    println!(
        "Migrating Issue {} [{}]",
        issue.number.cyan(),
        issue.state
    );
    println!("Opened by {} on {}", issue.author, issue.created_at);
    println!("Title: {:?}", issue.title);
    println!("Body: {:?}", issue.body);
    println!("URL: {}", issue.url.dimmed());
    println!();
}

fn print_success(number: u64, url: &str) {
    println!("\n-------------------------------");
    println!("Successfully migrated issue {} to:", number);
    println!("{}", url.green());
    println!("Please review each issue for accuracy");
    println!("-------------------------------\n");
}
