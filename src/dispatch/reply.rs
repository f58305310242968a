use std::fmt::{Display, Formatter, Result};

use crate::primitives::Digest;
use crate::session::SessionError;

use super::command::ParseCommandError;

/// User-facing outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    RegisterSuccessful,
    LoginSuccessful,
    AccountUpdated,
    AccountDeleted,
    LoggedOut,
    NotLoggedIn,
    PleaseLogin,
    UsernameAlreadyExists,
    UsernameNotFound,
    UsernameIsRegistered,
    IncorrectPassword,
    /// A stored record: the logged-in user or an inspected row.
    Record { username: String, digest: Digest },
    RowIsEmpty,
    RowOutOfBounds,
    Count(usize),
    Capacity(usize),
    /// The input line did not parse as a command.
    InvalidCommand,
}

impl From<SessionError> for Reply {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::UsernameAlreadyExists(_) => Reply::UsernameAlreadyExists,
            SessionError::UsernameNotFound(_) => Reply::UsernameNotFound,
            SessionError::IncorrectPassword(_) => Reply::IncorrectPassword,
            SessionError::NotLoggedIn => Reply::PleaseLogin,
            SessionError::RowOutOfBounds { .. } => Reply::RowOutOfBounds,
        }
    }
}

impl From<ParseCommandError> for Reply {
    fn from(_: ParseCommandError) -> Self {
        Reply::InvalidCommand
    }
}

impl Display for Reply {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Reply::RegisterSuccessful => f.write_str("Register Successful"),
            Reply::LoginSuccessful => f.write_str("Login Successful"),
            Reply::AccountUpdated => f.write_str("Your Account Has Been Updated"),
            Reply::AccountDeleted => f.write_str("Your Account Has Been Deleted"),
            Reply::LoggedOut => f.write_str("You Have Been Logged Out"),
            Reply::NotLoggedIn => f.write_str("You Have Not Been Logged In"),
            Reply::PleaseLogin => f.write_str("Please Login"),
            Reply::UsernameAlreadyExists => f.write_str("Username Already Exist"),
            Reply::UsernameNotFound => f.write_str("Username Not Found"),
            Reply::UsernameIsRegistered => f.write_str("Username Is Registered"),
            Reply::IncorrectPassword => f.write_str("Incorrect Password"),
            Reply::Record { username, digest } => write!(f, "{} {}", username, digest),
            Reply::RowIsEmpty => f.write_str("Row Is Empty"),
            Reply::RowOutOfBounds => f.write_str("Row Out Of Bounds"),
            Reply::Count(n) | Reply::Capacity(n) => write!(f, "{}", n),
            Reply::InvalidCommand => f.write_str("Invalid Command"),
        }
    }
}
