//! The aggregate root owning the unique cheatsheet collection.

use crate::error::{CheatbankError, Result};
use crate::list::{ListError, UniqueList};
use crate::model::Cheatsheet;

/// Owns exactly one [`UniqueList`] of cheatsheets. The bank never holds two
/// cheatsheets with the same title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheatsheetBank {
    cheatsheets: UniqueList<Cheatsheet>,
}

impl CheatsheetBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank holding copies of another bank's cheatsheets.
    pub fn from_bank(other: &CheatsheetBank) -> Self {
        other.clone()
    }

    /// True iff a cheatsheet with the same title exists in the bank.
    pub fn has(&self, cheatsheet: &Cheatsheet) -> bool {
        self.cheatsheets.contains(cheatsheet)
    }

    /// Adds a cheatsheet. The caller is expected to have checked [`has`]
    /// first; a duplicate title is still rejected here.
    ///
    /// [`has`]: CheatsheetBank::has
    pub fn add(&mut self, cheatsheet: Cheatsheet) -> Result<()> {
        self.cheatsheets.add(cheatsheet).map_err(map_list_error)
    }

    /// Removes the cheatsheet fully equal to `cheatsheet`.
    pub fn remove(&mut self, cheatsheet: &Cheatsheet) -> Result<()> {
        self.cheatsheets.remove(cheatsheet).map_err(map_list_error)
    }

    /// Replaces `target` with `edited`, keeping its position in the list.
    pub fn replace(&mut self, target: &Cheatsheet, edited: Cheatsheet) -> Result<()> {
        self.cheatsheets
            .replace(target, edited)
            .map_err(map_list_error)
    }

    /// Replaces the whole collection. The incoming list must not contain
    /// two cheatsheets with the same title.
    pub fn set_cheatsheets(&mut self, cheatsheets: Vec<Cheatsheet>) -> Result<()> {
        self.cheatsheets
            .set_all(cheatsheets)
            .map_err(map_list_error)
    }

    /// Resets this bank's contents from another bank.
    pub fn reset_data(&mut self, other: &CheatsheetBank) -> Result<()> {
        self.set_cheatsheets(other.cheatsheets().to_vec())
    }

    /// Read-only view of the full collection, in insertion order. This is
    /// the sequence the persistence and presentation boundaries consume.
    pub fn cheatsheets(&self) -> &[Cheatsheet] {
        self.cheatsheets.as_slice()
    }

    pub fn len(&self) -> usize {
        self.cheatsheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cheatsheets.is_empty()
    }
}

fn map_list_error(err: ListError) -> CheatbankError {
    match err {
        ListError::Duplicate => CheatbankError::DuplicateCheatsheet,
        ListError::NotFound => CheatbankError::CheatsheetNotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Tag, Title};
    use std::collections::BTreeSet;

    fn sheet(title: &str, tags: &[&str]) -> Cheatsheet {
        let tags = tags.iter().map(|t| Tag::new(*t).unwrap()).collect();
        Cheatsheet::new(Title::new(title).unwrap(), BTreeSet::new(), tags)
    }

    #[test]
    fn add_then_has() {
        let mut bank = CheatsheetBank::new();
        bank.add(sheet("midterm quiz", &["cs2103t"])).unwrap();
        assert!(bank.has(&sheet("midterm quiz", &[])));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn duplicate_add_maps_to_crate_error() {
        let mut bank = CheatsheetBank::new();
        bank.add(sheet("a", &[])).unwrap();
        let err = bank.add(sheet("a", &["tagged"])).unwrap_err();
        assert!(matches!(err, CheatbankError::DuplicateCheatsheet));
    }

    #[test]
    fn reset_data_round_trips_in_order() {
        let mut source = CheatsheetBank::new();
        source.add(sheet("b", &[])).unwrap();
        source.add(sheet("a", &["x"])).unwrap();

        let mut bank = CheatsheetBank::new();
        bank.add(sheet("stale", &[])).unwrap();
        bank.reset_data(&source).unwrap();

        assert_eq!(bank.cheatsheets(), source.cheatsheets());
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut bank = CheatsheetBank::new();
        let err = bank.remove(&sheet("ghost", &[])).unwrap_err();
        assert!(matches!(err, CheatbankError::CheatsheetNotFound));
    }
}
