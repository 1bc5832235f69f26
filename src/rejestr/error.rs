use crate::identifiers::IdentifierError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RejestrError {
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("User {user_id} is removed and cannot be reactivated")]
    StatusTransition { user_id: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl RejestrError {
    /// True when the operation failed only because no record carried the id.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RejestrError::UserNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, RejestrError>;
