use thiserror::Error;

use crate::table::TableError;

/// Outcomes of session operations that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("username `{0}` already exists")]
    UsernameAlreadyExists(String),

    #[error("username `{0}` not found")]
    UsernameNotFound(String),

    #[error("incorrect password for `{0}`")]
    IncorrectPassword(String),

    /// The operation needs a logged-in user and there is none.
    #[error("no user is logged in")]
    NotLoggedIn,

    #[error("row {index} is out of bounds for capacity {capacity}")]
    RowOutOfBounds { index: usize, capacity: usize },
}

impl From<TableError> for SessionError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::AlreadyExists(name) | TableError::UsernameTaken(name) => {
                SessionError::UsernameAlreadyExists(name)
            }
            TableError::NotFound(name) => SessionError::UsernameNotFound(name),
            TableError::OutOfBounds { index, capacity } => {
                SessionError::RowOutOfBounds { index, capacity }
            }
        }
    }
}
