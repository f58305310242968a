//! Credential table.
//!
//! An open-addressing hash table keyed by username that stores
//! `(username, password digest)` pairs.
//!
//! The implementation is split into small layers:
//!
//! - [`core`](self::core)  
//!   The table itself and its public operations.
//!
//! - [`probe`]  
//!   The indexing hash and the bounded double-hashing probe sequence. The
//!   indexing hash is independent of the password digest.
//!
//! - `prime`  
//!   Primality helpers used to size the table.
//!
//! - [`params`]  
//!   Tunable sizing parameters and their validation.
//!
//! ## Design notes
//!
//! - Capacity is always prime and larger than the step prime, which makes
//!   every probe sequence a full cycle over the rows.
//! - Deleted rows are simply emptied. Lookups always scan the full probe
//!   sequence and growth rebuilds the table, so no tombstones are needed.
//! - Every operation either succeeds completely or leaves the table
//!   untouched.
//!
//! ## Concurrency
//!
//! The table is single-threaded. A concurrent host must guard the whole
//! table with one lock, because lookups followed by mutations are not
//! atomic on their own.

pub mod core;
mod error;
pub mod params;
pub(crate) mod prime;
pub mod probe;
mod slot;

pub use self::core::CredentialTable;
pub use error::TableError;
pub use params::{TableParamError, TableParams};
pub use slot::{Slot, StoredRecord};
