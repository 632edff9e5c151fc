use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CheatbankError, Result};
use crate::manager::ModelManager;
use crate::model::Cheatsheet;
use log::info;

pub const MESSAGE_SUCCESS: &str = "New cheatsheet added";

/// Adds a fully constructed cheatsheet to the model. Fails with
/// [`CheatbankError::DuplicateCheatsheet`] if a sheet with the same title is
/// already present; the bank is unchanged in that case.
pub fn run(model: &mut ModelManager, cheatsheet: Cheatsheet) -> Result<CmdResult> {
    if model.has_cheatsheet(&cheatsheet) {
        return Err(CheatbankError::DuplicateCheatsheet);
    }

    model.add_cheatsheet(cheatsheet.clone())?;
    info!("added cheatsheet '{}'", cheatsheet.title());

    let mut result = CmdResult::default().with_affected(vec![cheatsheet.clone()]);
    result.add_message(CmdMessage::success(format!(
        "{}: {}",
        MESSAGE_SUCCESS, cheatsheet
    )));
    Ok(result)
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
    fn adds_and_reports_success() {
        let mut model = ModelManager::default();
        let result = run(&mut model, sheet("midterm quiz", &["cs2103t"])).unwrap();

        assert_eq!(model.bank().len(), 1);
        assert_eq!(result.affected.len(), 1);
        assert!(result.messages[0].content.contains("midterm quiz"));
    }

    #[test]
    fn duplicate_title_fails_and_leaves_bank_unchanged() {
        let mut model = ModelManager::default();
        run(&mut model, sheet("midterm quiz", &["cs2103t"])).unwrap();

        let err = run(&mut model, sheet("midterm quiz", &[])).unwrap_err();
        assert!(matches!(err, CheatbankError::DuplicateCheatsheet));
        assert_eq!(err.to_string(), "This cheatsheet already exists");
        assert_eq!(model.bank().len(), 1);
        // The original entry, tags and all, is still the one in the bank.
        assert_eq!(model.bank().cheatsheets()[0].tags().len(), 1);
    }
}
