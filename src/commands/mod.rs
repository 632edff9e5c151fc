//! Business logic for each user command: one module per command, each
//! exposing `run(model, ...) -> Result<CmdResult>`. Commands are
//! single-shot and stateless; they never print.

use crate::model::Cheatsheet;

pub mod add;
pub mod clear;
pub mod delete;
pub mod find;
pub mod list;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A cheatsheet paired with its 1-based position in the filtered view at
/// the time of listing.
#[derive(Debug, Clone)]
pub struct ListedCheatsheet {
    pub index: usize,
    pub cheatsheet: Cheatsheet,
}

/// Structured outcome of a command: the cheatsheets it touched, the view it
/// listed, and user-facing messages. Presentation layers render this.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Cheatsheet>,
    pub listed: Vec<ListedCheatsheet>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, cheatsheets: Vec<Cheatsheet>) -> Self {
        self.affected = cheatsheets;
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedCheatsheet>) -> Self {
        self.listed = listed;
        self
    }
}
