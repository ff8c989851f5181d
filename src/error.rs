use thiserror::Error;

#[derive(Error, Debug)]
pub enum MigratronError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("repository '{0}' is not in org/name format")]
    InvalidRepo(String),

    #[error("issue #{0} is a pull request and can not be migrated")]
    PullRequest(u64),

    #[error("issue #{number} has label {label} applied, exiting")]
    OptedOut { number: u64, label: String },

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("editor exited with status {0}")]
    EditorFailed(i32),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MigratronError>;
