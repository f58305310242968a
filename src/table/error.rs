use thiserror::Error;

/// Errors returned by credential table operations.
///
/// Every variant is an expected, recoverable outcome. A failed operation
/// leaves the table exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A record with this username is already stored.
    #[error("username `{0}` already exists")]
    AlreadyExists(String),

    /// No record with this username is stored.
    #[error("username `{0}` not found")]
    NotFound(String),

    /// A rename target is already taken by another record.
    #[error("username `{0}` is already taken")]
    UsernameTaken(String),

    /// A positional lookup addressed a row outside the table.
    #[error("row {index} is out of bounds for capacity {capacity}")]
    OutOfBounds { index: usize, capacity: usize },
}
