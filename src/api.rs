//! # API Facade
//!
//! Thin entry point for all cheatbank operations, regardless of the UI in
//! front of it. The facade dispatches to the command layer, normalizes
//! inputs (raw strings into validated value types, index strings into
//! 1-based positions), and returns structured [`CmdResult`] values. It does
//! no business logic, no I/O of its own, and never prints.

use crate::bank::CheatsheetBank;
use crate::commands;
use crate::error::{CheatbankError, Result};
use crate::manager::ModelManager;
use crate::model::{Cheatsheet, Content, Tag, Title};
use crate::parse::{self, Command, DELETE_USAGE, MESSAGE_INVALID_FORMAT};
use crate::prefs::UserPrefs;
use crate::storage;
use std::collections::BTreeSet;
use std::path::Path;

pub use crate::commands::{CmdMessage, CmdResult, ListedCheatsheet, MessageLevel};

pub struct CheatbankApi {
    model: ModelManager,
}

impl Default for CheatbankApi {
    fn default() -> Self {
        Self::new(ModelManager::default())
    }
}

impl CheatbankApi {
    pub fn new(model: ModelManager) -> Self {
        Self { model }
    }

    /// Builds an API over a bank loaded from `path` (empty if missing).
    pub fn load<P: AsRef<Path>>(path: P, prefs: UserPrefs) -> Result<Self> {
        let bank = storage::load(path)?;
        Ok(Self::new(ModelManager::new(bank, prefs)))
    }

    /// Snapshots the current bank to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        storage::save(path, self.model.bank())
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn add(
        &mut self,
        title: &str,
        contents: &[String],
        tags: &[String],
    ) -> Result<CmdResult> {
        let title = Title::new(title)?;
        let contents = contents
            .iter()
            .map(Content::new)
            .collect::<Result<BTreeSet<_>>>()?;
        let tags = tags.iter().map(Tag::new).collect::<Result<BTreeSet<_>>>()?;
        commands::add::run(&mut self.model, Cheatsheet::new(title, contents, tags))
    }

    pub fn delete(&mut self, index: &str) -> Result<CmdResult> {
        let index = parse::parse_index(index).ok_or_else(|| {
            CheatbankError::Parse(format!("{}\n{}", MESSAGE_INVALID_FORMAT, DELETE_USAGE))
        })?;
        commands::delete::run(&mut self.model, index)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.model)
    }

    pub fn find(&mut self, keywords: &[String]) -> Result<CmdResult> {
        commands::find::run(&mut self.model, keywords)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.model)
    }

    /// Parses and runs one line of free-text input, the way the desktop
    /// shell feeds commands in.
    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        match parse::parse_command(line)? {
            Command::Add(cheatsheet) => commands::add::run(&mut self.model, cheatsheet),
            Command::Delete(index) => commands::delete::run(&mut self.model, index),
            Command::List => commands::list::run(&self.model),
            Command::Find(keywords) => commands::find::run(&mut self.model, &keywords),
            Command::Clear => commands::clear::run(&mut self.model),
        }
    }

    /// Read-only access to the full bank for persistence/presentation.
    pub fn bank(&self) -> &CheatsheetBank {
        self.model.bank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_runs_the_worked_example() {
        let mut api = CheatbankApi::default();

        api.execute("add t/midterm quiz tag/cs2103t").unwrap();
        assert_eq!(api.bank().len(), 1);

        let err = api.execute("add t/midterm quiz").unwrap_err();
        assert!(matches!(err, CheatbankError::DuplicateCheatsheet));
        assert_eq!(api.bank().len(), 1);

        api.execute("delete 1").unwrap();
        assert!(api.bank().is_empty());

        let err = api.execute("delete 1").unwrap_err();
        assert!(matches!(err, CheatbankError::InvalidIndex));
    }

    #[test]
    fn add_normalizes_raw_strings() {
        let mut api = CheatbankApi::default();
        api.add("physics", &["f = ma".to_string()], &["phy1001".to_string()])
            .unwrap();

        let sheet = &api.bank().cheatsheets()[0];
        assert_eq!(sheet.title().as_str(), "physics");
        assert_eq!(sheet.contents().len(), 1);
        assert_eq!(sheet.tags().len(), 1);
    }

    #[test]
    fn delete_rejects_malformed_index_string() {
        let mut api = CheatbankApi::default();
        assert!(matches!(
            api.delete("zero"),
            Err(CheatbankError::Parse(_))
        ));
    }

    #[test]
    fn find_then_delete_uses_view_indexes() {
        let mut api = CheatbankApi::default();
        api.execute("add t/midterm quiz").unwrap();
        api.execute("add t/final exam").unwrap();
        api.execute("add t/lab quiz").unwrap();

        api.execute("find quiz").unwrap();
        // View: [midterm quiz, lab quiz]; delete the second visible one.
        api.execute("delete 2").unwrap();

        let titles: Vec<_> = api
            .bank()
            .cheatsheets()
            .iter()
            .map(|s| s.title().as_str())
            .collect();
        assert_eq!(titles, ["midterm quiz", "final exam"]);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bank.json");

        let mut api = CheatbankApi::default();
        api.execute("add t/midterm quiz tag/cs2103t").unwrap();
        api.save(&path).unwrap();

        let restored = CheatbankApi::load(&path, UserPrefs::default()).unwrap();
        assert_eq!(restored.bank().cheatsheets(), api.bank().cheatsheets());
    }
}
