//! In-memory fakes for exercising the migration workflow without a
//! terminal, an editor, or a network.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::{MigrationConfig, RepoRef};
use crate::editor::Editor;
use crate::error::{MigratronError, Result};
use crate::prompt::Prompter;
use crate::remote::{
    IssueHost, NewIssue, RemoteComment, RemoteIssue, RemoteStatus, RemoteUser,
};

/// Prompter answering from a script instead of stdin.
///
/// A confirmation is "yes" when its label starts with any registered
/// prefix; everything else is "no". Text prompts answer from the
/// registered map, falling back to the default.
pub struct ScriptedPrompter {
    yes: Vec<String>,
    text: HashMap<String, String>,
    confirms: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        ScriptedPrompter {
            yes: Vec::new(),
            text: HashMap::new(),
            confirms: Mutex::new(Vec::new()),
        }
    }

    pub fn yes_to(mut self, label_prefixes: &[&str]) -> Self {
        self.yes
            .extend(label_prefixes.iter().map(|l| l.to_string()));
        self
    }

    pub fn text_answer(mut self, label: &str, answer: &str) -> Self {
        self.text.insert(label.to_string(), answer.to_string());
        self
    }

    /// Labels of every confirmation asked so far, in order.
    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, label: &str) -> Result<bool> {
        self.confirms.lock().unwrap().push(label.to_string());
        Ok(self.yes.iter().any(|prefix| label.starts_with(prefix)))
    }

    fn ask_text(&self, label: &str, default: &str) -> Result<String> {
        Ok(self
            .text
            .get(label)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }
}

/// Editor that records every invocation and returns a canned revision
/// (or the seed content unchanged).
pub struct RecordingEditor {
    output: Option<String>,
    edits: Mutex<Vec<(String, String)>>,
}

impl RecordingEditor {
    pub fn passthrough() -> Self {
        RecordingEditor {
            output: None,
            edits: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(output: &str) -> Self {
        RecordingEditor {
            output: Some(output.to_string()),
            edits: Mutex::new(Vec::new()),
        }
    }

    /// Every `(name_hint, seed_content)` pair seen so far.
    pub fn edits(&self) -> Vec<(String, String)> {
        self.edits.lock().unwrap().clone()
    }
}

impl Editor for RecordingEditor {
    fn edit(&self, name_hint: &str, initial: &str) -> Result<String> {
        self.edits
            .lock()
            .unwrap()
            .push((name_hint.to_string(), initial.to_string()));
        Ok(self
            .output
            .clone()
            .unwrap_or_else(|| initial.to_string()))
    }
}

/// One mutating call recorded by [`FakeHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostWrite {
    CreateIssue {
        repo: String,
        title: String,
        body: String,
        labels: Vec<String>,
    },
    CreateComment {
        repo: String,
        number: u64,
        body: String,
    },
    AddLabels {
        repo: String,
        number: u64,
        labels: Vec<String>,
    },
}

#[derive(Default)]
struct FakeState {
    issues: Vec<(String, RemoteIssue)>,
    comments: HashMap<(String, u64), Vec<RemoteComment>>,
    writes: Vec<HostWrite>,
    next_number: u64,
}

/// In-memory issue host recording every write in call order.
pub struct FakeHost {
    state: Mutex<FakeState>,
}

impl FakeHost {
    pub fn new() -> Self {
        FakeHost {
            state: Mutex::new(FakeState {
                next_number: 100,
                ..FakeState::default()
            }),
        }
    }

    pub fn add_issue(&self, repo: &RepoRef, issue: RemoteIssue) {
        self.state
            .lock()
            .unwrap()
            .issues
            .push((repo.to_string(), issue));
    }

    pub fn add_comments(&self, repo: &RepoRef, number: u64, comments: Vec<RemoteComment>) {
        self.state
            .lock()
            .unwrap()
            .comments
            .insert((repo.to_string(), number), comments);
    }

    pub fn writes(&self) -> Vec<HostWrite> {
        self.state.lock().unwrap().writes.clone()
    }
}

impl IssueHost for FakeHost {
    async fn get_issue(&self, repo: &RepoRef, number: u64) -> Result<RemoteIssue> {
        let state = self.state.lock().unwrap();
        state
            .issues
            .iter()
            .find(|(r, issue)| *r == repo.to_string() && issue.number == number)
            .map(|(_, issue)| issue.clone())
            .ok_or_else(|| MigratronError::IssueNotFound(format!("{}#{}", repo, number)))
    }

    async fn list_issues(&self, repo: &RepoRef) -> Result<Vec<RemoteIssue>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .issues
            .iter()
            .filter(|(r, _)| *r == repo.to_string())
            .map(|(_, issue)| issue.clone())
            .collect())
    }

    async fn list_comments(&self, repo: &RepoRef, number: u64) -> Result<Vec<RemoteComment>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .comments
            .get(&(repo.to_string(), number))
            .cloned()
            .unwrap_or_default())
    }

    async fn create_issue(&self, repo: &RepoRef, request: &NewIssue) -> Result<RemoteIssue> {
        let mut state = self.state.lock().unwrap();
        let number = state.next_number;
        state.next_number += 1;

        let issue = RemoteIssue {
            number,
            title: request.title.clone(),
            body: request.body.clone(),
            author: "operator".to_string(),
            state: RemoteStatus::Open,
            labels: request.labels.clone(),
            created_at: "2021-03-05 12:00:00".to_string(),
            url: format!("https://github.com/{}/issues/{}", repo, number),
            is_pull_request: false,
        };

        state.writes.push(HostWrite::CreateIssue {
            repo: repo.to_string(),
            title: request.title.clone(),
            body: request.body.clone(),
            labels: request.labels.clone(),
        });
        state.issues.push((repo.to_string(), issue.clone()));

        Ok(issue)
    }

    async fn create_comment(&self, repo: &RepoRef, number: u64, body: &str) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .writes
            .push(HostWrite::CreateComment {
                repo: repo.to_string(),
                number,
                body: body.to_string(),
            });
        Ok(())
    }

    async fn add_labels(&self, repo: &RepoRef, number: u64, labels: &[String]) -> Result<()> {
        self.state.lock().unwrap().writes.push(HostWrite::AddLabels {
            repo: repo.to_string(),
            number,
            labels: labels.to_vec(),
        });
        Ok(())
    }

    async fn get_user(&self, login: &str) -> Result<RemoteUser> {
        Ok(RemoteUser {
            login: login.to_string(),
        })
    }
}

pub fn issue_fixture(number: u64, title: &str, body: &str, labels: &[&str]) -> RemoteIssue {
    RemoteIssue {
        number,
        title: title.to_string(),
        body: body.to_string(),
        author: "alice".to_string(),
        state: RemoteStatus::Open,
        labels: labels.iter().map(|l| l.to_string()).collect(),
        created_at: "2021-02-01 08:00:00".to_string(),
        url: format!("https://github.com/source-org/tracker/issues/{}", number),
        is_pull_request: false,
    }
}

pub fn config_fixture() -> MigrationConfig {
    MigrationConfig {
        login: "operator".to_string(),
        migrated_label: "migration/migrated".to_string(),
        imported_label: "migration/imported".to_string(),
    }
}
