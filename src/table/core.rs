//! Credential table core implementation.
//!
//! The table is a single vector of rows addressed `0..capacity`. Rows are
//! located with the double-hashing [`ProbeSequence`]; there are no
//! tombstones, so every lookup scans the whole bounded sequence rather than
//! stopping at the first empty row.
//!
//! ## Provided operations
//!
//! - [`CredentialTable::create`]
//! - [`CredentialTable::get`]
//! - [`CredentialTable::update_password`]
//! - [`CredentialTable::rename`]
//! - [`CredentialTable::delete`]
//! - [`CredentialTable::row_at`]
//!
//! ## Growth
//!
//! After each insertion the load factor is checked. Once
//! `len / capacity >= load_factor`, the table is rebuilt at the smallest
//! prime at least twice the current capacity, and every record is placed
//! again along its probe sequence for the new capacity.

use log::{debug, trace};

use crate::hash::md5;
use crate::primitives::Digest;

use super::error::TableError;
use super::params::{TableParamError, TableParams};
use super::prime::next_prime;
use super::probe::ProbeSequence;
use super::slot::{Slot, StoredRecord};

/// Open-addressing table of usernames and password digests.
#[derive(Clone, Debug)]
pub struct CredentialTable {
    slots: Vec<Slot>,
    count: usize,
    params: TableParams,
}

impl CredentialTable {
    /// Creates an empty table with the default parameters (11 rows, load
    /// factor 0.7, step prime 7).
    pub fn new() -> Self {
        Self::from_valid_params(TableParams::default())
    }

    /// Creates an empty table with custom parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters fail validation.
    pub fn with_params(params: TableParams) -> Result<Self, TableParamError> {
        params.validate()?;

        Ok(Self::from_valid_params(params))
    }

    fn from_valid_params(params: TableParams) -> Self {
        CredentialTable {
            slots: vec![Slot::Empty; params.initial_capacity],
            count: 0,
            params,
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of rows.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current ratio of stored records to rows.
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    pub fn params(&self) -> &TableParams {
        &self.params
    }

    fn probe(&self, username: &str) -> ProbeSequence {
        ProbeSequence::for_username(username, self.capacity(), self.params.step_prime)
    }

    fn find(&self, username: &str) -> Option<usize> {
        self.probe(username).find(|&idx| self.slots[idx].holds(username))
    }

    fn open_row(&self, username: &str) -> Option<usize> {
        self.probe(username).find(|&idx| self.slots[idx].is_empty())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.find(username).is_some()
    }

    /// Stores a new record for `username` with the digest of `password`.
    ///
    /// The table may grow before this returns.
    ///
    /// # Errors
    ///
    /// [`TableError::AlreadyExists`] if `username` is already stored.
    pub fn create(&mut self, username: &str, password: &str) -> Result<StoredRecord, TableError> {
        self.create_with_digest(username, md5(password.as_bytes()))
    }

    /// Stores a new record whose password digest is already computed.
    pub(crate) fn create_with_digest(
        &mut self,
        username: &str,
        password_digest: Digest,
    ) -> Result<StoredRecord, TableError> {
        if self.contains(username) {
            return Err(TableError::AlreadyExists(username.to_owned()));
        }

        let record = StoredRecord::new(username, password_digest);

        // Only a full table has no open row; growing always frees one.
        let idx = loop {
            match self.open_row(username) {
                Some(idx) => break idx,
                None => self.expand(),
            }
        };

        trace!("storing `{}` at row {}", username, idx);
        self.slots[idx] = Slot::Occupied(record.clone());
        self.count += 1;

        if self.load_factor() >= self.params.load_factor {
            self.expand();
        }

        Ok(record)
    }

    /// Looks up the record for `username`.
    ///
    /// # Errors
    ///
    /// [`TableError::NotFound`] once every row of the probe sequence has been
    /// checked without a match.
    pub fn get(&self, username: &str) -> Result<&StoredRecord, TableError> {
        self.find(username)
            .and_then(|idx| self.slots[idx].record())
            .ok_or_else(|| TableError::NotFound(username.to_owned()))
    }

    /// Checks `password` against the stored digest for `username`.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool, TableError> {
        let record = self.get(username)?;

        Ok(record.password_digest == md5(password.as_bytes()))
    }

    /// Replaces the password digest of `username` in place.
    pub fn update_password(&mut self, username: &str, new_password: &str) -> Result<(), TableError> {
        let idx = self
            .find(username)
            .ok_or_else(|| TableError::NotFound(username.to_owned()))?;

        if let Slot::Occupied(record) = &mut self.slots[idx] {
            record.password_digest = md5(new_password.as_bytes());
        }

        Ok(())
    }

    /// Moves the record of `old_username` to `new_username`, keeping its
    /// password digest unchanged.
    ///
    /// # Errors
    ///
    /// - [`TableError::UsernameTaken`] if `new_username` is already stored.
    /// - [`TableError::NotFound`] if `old_username` is not stored.
    pub fn rename(&mut self, old_username: &str, new_username: &str) -> Result<(), TableError> {
        if self.contains(new_username) {
            return Err(TableError::UsernameTaken(new_username.to_owned()));
        }

        let idx = self
            .find(old_username)
            .ok_or_else(|| TableError::NotFound(old_username.to_owned()))?;

        let Some(record) = std::mem::take(&mut self.slots[idx]).into_record() else {
            return Err(TableError::NotFound(old_username.to_owned()));
        };
        self.count -= 1;

        trace!("renaming `{}` to `{}`", old_username, new_username);
        self.create_with_digest(new_username, record.password_digest)?;

        Ok(())
    }

    /// Removes the record of `username`, leaving its row empty.
    pub fn delete(&mut self, username: &str) -> Result<(), TableError> {
        let idx = self
            .find(username)
            .ok_or_else(|| TableError::NotFound(username.to_owned()))?;

        trace!("clearing row {} (`{}`)", idx, username);
        self.slots[idx] = Slot::Empty;
        self.count -= 1;

        Ok(())
    }

    /// Returns the row at `index` without hashing.
    pub fn row_at(&self, index: usize) -> Result<&Slot, TableError> {
        self.slots.get(index).ok_or(TableError::OutOfBounds {
            index,
            capacity: self.capacity(),
        })
    }

    /// Iterates over stored records in row order.
    pub fn records(&self) -> impl Iterator<Item = &StoredRecord> + '_ {
        self.slots.iter().filter_map(Slot::record)
    }

    /// Rebuilds the table at the smallest prime at least twice the current
    /// capacity.
    fn expand(&mut self) {
        let old_capacity = self.capacity();
        let records: Vec<StoredRecord> = std::mem::take(&mut self.slots)
            .into_iter()
            .filter_map(Slot::into_record)
            .collect();

        let mut capacity = next_prime(old_capacity * 2);
        let rows = loop {
            match layout(&records, capacity, self.params.step_prime) {
                Some(rows) => break rows,
                None => capacity = next_prime(capacity * 2),
            }
        };

        let mut slots = vec![Slot::Empty; capacity];
        for (record, row) in records.into_iter().zip(rows) {
            slots[row] = Slot::Occupied(record);
        }

        debug!(
            "expanded credential table {} -> {} rows ({} records moved)",
            old_capacity, capacity, self.count
        );

        self.slots = slots;
    }
}

impl Default for CredentialTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Assigns each record the first free row of its probe sequence over
/// `capacity` rows, in order. Returns `None` if some record finds no row.
fn layout(records: &[StoredRecord], capacity: usize, step_prime: u32) -> Option<Vec<usize>> {
    let mut taken = vec![false; capacity];
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let row = ProbeSequence::for_username(&record.username, capacity, step_prime)
            .find(|&idx| !taken[idx])?;

        taken[row] = true;
        rows.push(row);
    }

    Some(rows)
}
