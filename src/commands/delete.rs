use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CheatbankError, Result};
use crate::manager::ModelManager;
use log::info;

pub const MESSAGE_SUCCESS: &str = "Deleted Cheatsheet";

/// Deletes the cheatsheet at `index` (1-based) in the CURRENT filtered
/// view. Indexes are view-relative: under an active filter, index 1 is the
/// first *visible* cheatsheet, whatever its position in the backing list.
pub fn run(model: &mut ModelManager, index: usize) -> Result<CmdResult> {
    let target = {
        let shown = model.filtered_cheatsheets();
        if index == 0 || index > shown.len() {
            return Err(CheatbankError::InvalidIndex);
        }
        shown[index - 1].clone()
    };

    model.delete_cheatsheet(&target)?;
    info!("deleted cheatsheet '{}'", target.title());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{}: {}",
        MESSAGE_SUCCESS, target
    )));
    Ok(result.with_affected(vec![target]))
}
