use std::str::FromStr;

use thiserror::Error;

use crate::session::EditField;

/// One parsed input line.
///
/// A line that fails to parse is answered with [`Reply::InvalidCommand`]
/// rather than dropped, so every non-blank input line gets one reply.
///
/// [`Reply::InvalidCommand`]: super::Reply::InvalidCommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register { username: String, password: String },
    Login { username: String, password: String },
    EditCurrent { field: EditField, value: String },
    IsAuthenticated,
    Unregister { username: String, password: String },
    Logout,
    Inspect { row: usize },
    CheckUsername { username: String },
    CountUsername,
    Capacity,
    Exit,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command line")]
    Empty,

    #[error("unknown command `{0}`")]
    Unknown(String),

    #[error("`{command}` expects {expected} argument(s), got {got}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("`{0}` is not an editable field (expected USERNAME or PASSWORD)")]
    InvalidEditField(String),

    #[error("`{0}` is not a valid row number")]
    InvalidRow(String),
}

fn expect_args(
    command: &'static str,
    args: &[&str],
    expected: usize,
) -> Result<(), ParseCommandError> {
    if args.len() != expected {
        return Err(ParseCommandError::WrongArity {
            command,
            expected,
            got: args.len(),
        });
    }

    Ok(())
}

impl FromStr for EditField {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USERNAME" => Ok(EditField::Username),
            "PASSWORD" => Ok(EditField::Password),
            other => Err(ParseCommandError::InvalidEditField(other.to_owned())),
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parses a whitespace-separated line such as `REGISTER alice secret`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(ParseCommandError::Empty)?;
        let args: Vec<&str> = parts.collect();

        let command = match name {
            "REGISTER" => {
                expect_args("REGISTER", &args, 2)?;
                Command::Register {
                    username: args[0].to_owned(),
                    password: args[1].to_owned(),
                }
            }
            "LOGIN" => {
                expect_args("LOGIN", &args, 2)?;
                Command::Login {
                    username: args[0].to_owned(),
                    password: args[1].to_owned(),
                }
            }
            "EDIT_CURRENT" => {
                expect_args("EDIT_CURRENT", &args, 2)?;
                Command::EditCurrent {
                    field: args[0].parse()?,
                    value: args[1].to_owned(),
                }
            }
            "IS_AUTHENTICATED" => {
                expect_args("IS_AUTHENTICATED", &args, 0)?;
                Command::IsAuthenticated
            }
            "UNREGISTER" => {
                expect_args("UNREGISTER", &args, 2)?;
                Command::Unregister {
                    username: args[0].to_owned(),
                    password: args[1].to_owned(),
                }
            }
            "LOGOUT" => {
                expect_args("LOGOUT", &args, 0)?;
                Command::Logout
            }
            "INSPECT" => {
                expect_args("INSPECT", &args, 1)?;
                let row = args[0]
                    .parse()
                    .map_err(|_| ParseCommandError::InvalidRow(args[0].to_owned()))?;
                Command::Inspect { row }
            }
            "CHECK_USERNAME" => {
                expect_args("CHECK_USERNAME", &args, 1)?;
                Command::CheckUsername {
                    username: args[0].to_owned(),
                }
            }
            "COUNT_USERNAME" => {
                expect_args("COUNT_USERNAME", &args, 0)?;
                Command::CountUsername
            }
            "CAPACITY" => {
                expect_args("CAPACITY", &args, 0)?;
                Command::Capacity
            }
            "EXIT" => Command::Exit,
            other => return Err(ParseCommandError::Unknown(other.to_owned())),
        };

        Ok(command)
    }
}
