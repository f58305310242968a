use crate::primitives::Digest;

/// A stored credential: a username and the digest of its password.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredRecord {
    /// Unique key of the record.
    pub username: String,

    /// Digest of the password; the plaintext is never stored.
    pub password_digest: Digest,
}

impl StoredRecord {
    pub fn new(username: impl Into<String>, password_digest: Digest) -> Self {
        StoredRecord {
            username: username.into(),
            password_digest,
        }
    }
}

/// One row of the table.
///
/// A row moves `Empty -> Occupied` on insertion and `Occupied -> Empty` on
/// deletion. Updating a password keeps the row `Occupied`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Slot {
    #[default]
    Empty,
    Occupied(StoredRecord),
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the stored record, if any.
    pub fn record(&self) -> Option<&StoredRecord> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(record) => Some(record),
        }
    }

    pub fn into_record(self) -> Option<StoredRecord> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(record) => Some(record),
        }
    }

    /// Returns `true` when the row holds the record for `username`.
    pub fn holds(&self, username: &str) -> bool {
        self.record().is_some_and(|r| r.username == username)
    }
}
