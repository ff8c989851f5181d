//! Interactive operator prompts.
//!
//! Every migration decision is made by the operator answering a prompt;
//! the workflow itself never decides anything. The trait seam keeps the
//! orchestrator testable without a terminal.

use std::io::{self, Write};

use crate::error::Result;

pub trait Prompter {
    /// Yes/no confirmation. Only `y`/`Y` counts as yes; anything else is a
    /// silent no.
    fn confirm(&self, label: &str) -> Result<bool>;

    /// Free-text prompt with a pre-filled default; an empty answer keeps
    /// the default.
    fn ask_text(&self, label: &str, default: &str) -> Result<String>;
}

/// Prompter backed by the operator's terminal.
pub struct Console;

impl Prompter for Console {
    fn confirm(&self, label: &str) -> Result<bool> {
        print!("{}? [y/N] ", label);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        Ok(input.trim().eq_ignore_ascii_case("y"))
    }

    fn ask_text(&self, label: &str, default: &str) -> Result<String> {
        print!("{} [{}]: ", label, default);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(default.to_string());
        }

        Ok(input.to_string())
    }
}
