//! JSON snapshot persistence for a [`CheatsheetBank`].
//!
//! The file holds the full entity list in insertion order. Loading
//! re-validates every field (blank titles, malformed tags) through the value
//! types' serde, and re-checks title uniqueness through the bank's bulk
//! replace; a file with two entries sharing a title fails to load.

use crate::bank::CheatsheetBank;
use crate::error::Result;
use crate::model::Cheatsheet;
use log::info;
use std::fs;
use std::path::Path;

/// Loads a bank from `path`. A missing file yields an empty bank.
pub fn load<P: AsRef<Path>>(path: P) -> Result<CheatsheetBank> {
    let path = path.as_ref();
    if !path.exists() {
        info!("no data file at {}, starting empty", path.display());
        return Ok(CheatsheetBank::new());
    }

    let content = fs::read_to_string(path)?;
    let cheatsheets: Vec<Cheatsheet> = serde_json::from_str(&content)?;

    let mut bank = CheatsheetBank::new();
    bank.set_cheatsheets(cheatsheets)?;
    info!("loaded {} cheatsheets from {}", bank.len(), path.display());
    Ok(bank)
}

/// Saves the bank's full entity list to `path`, creating parent directories
/// as needed.
pub fn save<P: AsRef<Path>>(path: P, bank: &CheatsheetBank) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let content = serde_json::to_string_pretty(bank.cheatsheets())?;
    fs::write(path, content)?;
    Ok(())
}
