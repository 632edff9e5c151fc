use crate::bank::CheatsheetBank;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::manager::ModelManager;
use log::info;

pub const MESSAGE_SUCCESS: &str = "Cheatsheet bank has been cleared";

/// Resets the bank to empty.
pub fn run(model: &mut ModelManager) -> Result<CmdResult> {
    let removed = model.bank().len();
    model.set_bank(&CheatsheetBank::new())?;
    info!("cleared bank ({} cheatsheets removed)", removed);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(MESSAGE_SUCCESS));
    Ok(result)
}
