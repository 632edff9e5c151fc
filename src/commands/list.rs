use crate::commands::{CmdMessage, CmdResult, ListedCheatsheet};
use crate::error::Result;
use crate::manager::ModelManager;

/// Lists the current filtered view with 1-based display indexes. These are
/// the indexes the delete command accepts.
pub fn run(model: &ModelManager) -> Result<CmdResult> {
    let listed: Vec<ListedCheatsheet> = model
        .filtered_cheatsheets()
        .into_iter()
        .enumerate()
        .map(|(i, sheet)| ListedCheatsheet {
            index: i + 1,
            cheatsheet: sheet.clone(),
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No cheatsheets to show"));
    }
    Ok(result.with_listed(listed))
}
