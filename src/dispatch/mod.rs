//! Line-oriented command dispatch.
//!
//! Parses commands such as `REGISTER alice secret` into [`Command`]s, runs
//! them against a [`Session`] and turns the outcome into a [`Reply`] whose
//! `Display` is the message shown to the user. This is the only layer that
//! produces text; the table and session report typed results.

mod command;
mod reply;

pub use command::{Command, ParseCommandError};
pub use reply::Reply;

use crate::session::Session;

impl Session {
    /// Runs one command. Returns `None` for [`Command::Exit`].
    pub fn execute(&mut self, command: Command) -> Option<Reply> {
        let reply = match command {
            Command::Register { username, password } => match self.register(&username, &password) {
                Ok(()) => Reply::RegisterSuccessful,
                Err(err) => err.into(),
            },
            Command::Login { username, password } => match self.login(&username, &password) {
                Ok(_) => Reply::LoginSuccessful,
                Err(err) => err.into(),
            },
            Command::EditCurrent { field, value } => match self.edit_current(field, &value) {
                Ok(()) => Reply::AccountUpdated,
                Err(err) => err.into(),
            },
            Command::IsAuthenticated => match self.current_user() {
                Some(record) => Reply::Record {
                    username: record.username.clone(),
                    digest: record.password_digest,
                },
                None => Reply::PleaseLogin,
            },
            Command::Unregister { username, password } => {
                match self.unregister(&username, &password) {
                    Ok(()) => Reply::AccountDeleted,
                    Err(err) => err.into(),
                }
            }
            Command::Logout => match self.logout() {
                Ok(()) => Reply::LoggedOut,
                Err(_) => Reply::NotLoggedIn,
            },
            Command::Inspect { row } => match self.inspect(row) {
                Ok(Some(record)) => Reply::Record {
                    username: record.username.clone(),
                    digest: record.password_digest,
                },
                Ok(None) => Reply::RowIsEmpty,
                Err(err) => err.into(),
            },
            Command::CheckUsername { username } => {
                if self.check_username(&username) {
                    Reply::UsernameIsRegistered
                } else {
                    Reply::UsernameNotFound
                }
            }
            Command::CountUsername => Reply::Count(self.count()),
            Command::Capacity => Reply::Capacity(self.capacity()),
            Command::Exit => return None,
        };

        Some(reply)
    }
}
