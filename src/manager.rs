//! The application-facing model: one bank, one set of user prefs, and a
//! live filtered read view.
//!
//! The filtered view is never a snapshot. It is recomputed from the backing
//! list and the active predicate on every read, so callers always observe
//! the latest mutations. Swapping the predicate takes effect on the next
//! read, with no re-query of the bank.

use crate::bank::CheatsheetBank;
use crate::error::Result;
use crate::model::Cheatsheet;
use crate::prefs::{GuiSettings, UserPrefs};
use log::debug;
use std::path::{Path, PathBuf};

/// The visibility predicate driving the filtered view.
pub type CheatsheetPredicate = Box<dyn Fn(&Cheatsheet) -> bool + Send>;

/// The "show all" predicate the view starts with, and resets to after adds.
pub fn show_all() -> CheatsheetPredicate {
    Box::new(|_| true)
}

pub struct ModelManager {
    bank: CheatsheetBank,
    prefs: UserPrefs,
    filter: CheatsheetPredicate,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(CheatsheetBank::new(), UserPrefs::default())
    }
}

impl ModelManager {
    pub fn new(bank: CheatsheetBank, prefs: UserPrefs) -> Self {
        debug!(
            "initializing model with {} cheatsheets and prefs {:?}",
            bank.len(),
            prefs
        );
        Self {
            bank,
            prefs,
            filter: show_all(),
        }
    }

    // ---- bank ----------------------------------------------------------

    pub fn bank(&self) -> &CheatsheetBank {
        &self.bank
    }

    /// Replaces the whole bank, e.g. after a bulk load.
    pub fn set_bank(&mut self, bank: &CheatsheetBank) -> Result<()> {
        self.bank.reset_data(bank)
    }

    pub fn has_cheatsheet(&self, cheatsheet: &Cheatsheet) -> bool {
        self.bank.has(cheatsheet)
    }

    /// Adds to the bank and resets the filter to show-all, so the new
    /// cheatsheet is immediately visible in the filtered view.
    pub fn add_cheatsheet(&mut self, cheatsheet: Cheatsheet) -> Result<()> {
        self.bank.add(cheatsheet)?;
        self.filter = show_all();
        Ok(())
    }

    /// Removes from the bank. The filter is left alone.
    pub fn delete_cheatsheet(&mut self, target: &Cheatsheet) -> Result<()> {
        self.bank.remove(target)
    }

    /// Replaces `target` with `edited` in place. The filter is left alone.
    pub fn set_cheatsheet(&mut self, target: &Cheatsheet, edited: Cheatsheet) -> Result<()> {
        self.bank.replace(target, edited)
    }

    // ---- filtered view -------------------------------------------------

    /// The current filtered view: backing list intersected with the active
    /// predicate, in backing-list order. Recomputed on every call.
    pub fn filtered_cheatsheets(&self) -> Vec<&Cheatsheet> {
        self.bank
            .cheatsheets()
            .iter()
            .filter(|sheet| (self.filter)(sheet))
            .collect()
    }

    /// Swaps the active predicate. Takes effect synchronously on the next
    /// read of the filtered view.
    pub fn set_filter(&mut self, predicate: CheatsheetPredicate) {
        self.filter = predicate;
    }

    // ---- user prefs ----------------------------------------------------

    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    pub fn gui_settings(&self) -> &GuiSettings {
        self.prefs.gui_settings()
    }

    pub fn set_gui_settings(&mut self, settings: GuiSettings) {
        self.prefs.set_gui_settings(settings);
    }

    pub fn data_file_path(&self) -> &Path {
        self.prefs.data_file_path()
    }

    pub fn set_data_file_path(&mut self, path: PathBuf) {
        self.prefs.set_data_file_path(path);
    }
}
