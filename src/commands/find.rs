use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CheatbankError, Result};
use crate::manager::ModelManager;
use crate::model::Cheatsheet;

/// Installs a title-keyword predicate on the model's filtered view. A sheet
/// is visible when any keyword matches a whole word of its title,
/// case-insensitively. Subsequent index-based commands operate on the
/// narrowed view.
pub fn run(model: &mut ModelManager, keywords: &[String]) -> Result<CmdResult> {
    if keywords.is_empty() {
        return Err(CheatbankError::Parse(
            "find: at least one keyword is required".to_string(),
        ));
    }

    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    model.set_filter(Box::new(move |sheet: &Cheatsheet| {
        sheet
            .title()
            .as_str()
            .split_whitespace()
            .any(|word| keywords.iter().any(|k| word.to_lowercase() == *k))
    }));

    let shown = model.filtered_cheatsheets().len();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("{} cheatsheets listed", shown)));
    Ok(result)
}
