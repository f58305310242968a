use log::debug;

use crate::table::{CredentialTable, StoredRecord};

use super::error::SessionError;

/// Field of the logged-in account changed by [`Session::edit_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Username,
    Password,
}

/// A credential table plus the currently logged-in user.
///
/// Only the username of the logged-in user is kept; its record is read
/// back from the table on demand, so the session never holds a stale
/// digest.
#[derive(Debug, Default)]
pub struct Session {
    table: CredentialTable,
    current: Option<String>,
}

impl Session {
    /// Starts a session over an empty default table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session over an existing table, with nobody logged in.
    pub fn with_table(table: CredentialTable) -> Self {
        Session {
            table,
            current: None,
        }
    }

    pub fn table(&self) -> &CredentialTable {
        &self.table
    }

    pub fn register(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        self.table.create(username, password)?;

        Ok(())
    }

    /// Logs `username` in after checking `password` against its digest.
    ///
    /// A successful login replaces any previously logged-in user.
    pub fn login(&mut self, username: &str, password: &str) -> Result<&StoredRecord, SessionError> {
        if !self.table.verify(username, password)? {
            return Err(SessionError::IncorrectPassword(username.to_owned()));
        }

        debug!("`{}` logged in", username);
        self.current = Some(username.to_owned());

        Ok(self.table.get(username)?)
    }

    pub fn logout(&mut self) -> Result<(), SessionError> {
        match self.current.take() {
            Some(username) => {
                debug!("`{}` logged out", username);
                Ok(())
            }
            None => Err(SessionError::NotLoggedIn),
        }
    }

    /// Record of the logged-in user, if any.
    pub fn current_user(&self) -> Option<&StoredRecord> {
        self.current
            .as_deref()
            .and_then(|username| self.table.get(username).ok())
    }

    /// Changes the username or the password of the logged-in user.
    ///
    /// Renaming carries the stored digest over unchanged.
    pub fn edit_current(&mut self, field: EditField, value: &str) -> Result<(), SessionError> {
        let Some(username) = self.current.clone() else {
            return Err(SessionError::NotLoggedIn);
        };

        match field {
            EditField::Password => self.table.update_password(&username, value)?,
            EditField::Username => {
                self.table.rename(&username, value)?;
                self.current = Some(value.to_owned());
            }
        }

        Ok(())
    }

    /// Deletes the account of `username` after checking `password`.
    ///
    /// If that account is the logged-in one, the session is logged out.
    pub fn unregister(&mut self, username: &str, password: &str) -> Result<(), SessionError> {
        if !self.table.verify(username, password)? {
            return Err(SessionError::IncorrectPassword(username.to_owned()));
        }

        self.table.delete(username)?;

        if self.current.as_deref() == Some(username) {
            self.current = None;
        }

        Ok(())
    }

    /// Record stored at table row `row`, bypassing the hash.
    pub fn inspect(&self, row: usize) -> Result<Option<&StoredRecord>, SessionError> {
        Ok(self.table.row_at(row)?.record())
    }

    pub fn check_username(&self, username: &str) -> bool {
        self.table.contains(username)
    }

    /// Number of registered users.
    pub fn count(&self) -> usize {
        self.table.len()
    }

    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }
}
