use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheatbankError {
    /// A cheatsheet with the same title is already in the bank.
    #[error("This cheatsheet already exists")]
    DuplicateCheatsheet,

    /// A replace/remove target was not present. Callers are expected to
    /// pre-check with `has`, so hitting this is a contract violation.
    #[error("Cheatsheet not found in the bank")]
    CheatsheetNotFound,

    #[error("The cheatsheet index provided is invalid")]
    InvalidIndex,

    /// Invalid command text or field format, with a user-facing explanation.
    #[error("{0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheatbankError>;
