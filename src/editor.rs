//! External editor round-trips over temp files.

use std::fs;
use std::process::Command;

use tempfile::Builder;

use crate::error::{MigratronError, Result};

const DEFAULT_EDITOR: &str = "vim";

pub trait Editor {
    /// Run an interactive edit of `initial`, returning the revised text.
    ///
    /// Blocks until the editor process exits; there is no timeout.
    fn edit(&self, name_hint: &str, initial: &str) -> Result<String>;
}

/// Editor launched as a foreground subprocess on a uniquely named temp file.
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    pub fn new(command: impl Into<String>) -> Self {
        SystemEditor {
            command: command.into(),
        }
    }

    /// Resolve the editor command from `$EDITOR`, falling back to vim.
    pub fn from_env() -> Self {
        Self::new(std::env::var("EDITOR").unwrap_or_else(|_| DEFAULT_EDITOR.to_string()))
    }
}

impl Editor for SystemEditor {
    fn edit(&self, name_hint: &str, initial: &str) -> Result<String> {
        // NamedTempFile removes the file on drop, covering every exit path.
        let file = Builder::new()
            .prefix("migratron.")
            .suffix(&format!(".{}.txt", name_hint))
            .tempfile()?;
        fs::write(file.path(), initial)?;

        // Executed through a shell so EDITOR values with arguments work
        // ("subl -w", "code --wait"); the path rides in as a positional
        // parameter.
        let status = Command::new("sh")
            .arg("-c")
            .arg(format!("{} \"$1\"", self.command))
            .arg("--")
            .arg(file.path())
            .status()?;

        if !status.success() {
            return Err(MigratronError::EditorFailed(status.code().unwrap_or(-1)));
        }

        Ok(fs::read_to_string(file.path())?)
    }
}
