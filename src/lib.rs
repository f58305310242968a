//! In-memory credential store
//!
//! This crate stores usernames together with a fingerprint of their
//! password. It is built from two layers: a byte-exact 128-bit message
//! digest, and an open-addressing hash table that keeps the digests.
//!
//! # Module overview
//!
//! - `primitives`  
//!   The fixed-size `Digest` value type, its hexadecimal rendering and its
//!   conversions.
//!
//! - `hash`  
//!   The RFC 1321 message digest. A pure function over any byte sequence;
//!   it has no error path and no state.
//!
//! - `table`  
//!   The credential table: double-hashing probe sequences over a prime
//!   number of rows, growth at a configurable load factor, and a closed set
//!   of error outcomes (`AlreadyExists`, `NotFound`, `UsernameTaken`,
//!   `OutOfBounds`). The table indexes usernames with its own hash and uses
//!   the digest only for passwords.
//!
//! - `session`  
//!   An explicit session context owning one table and the logged-in user:
//!   registration, login, logout, account edits and removal.
//!
//! - `dispatch`  
//!   Parsing of line-oriented commands and rendering of their replies. This
//!   is the only layer that produces user-facing text.
//!
//! # Design goals
//!
//! - No process-wide state; every operation goes through an owned value
//! - Expected failures are typed results, never panics
//! - Every table operation either completes or leaves the table unchanged
//! - No file, network or environment access below the dispatch layer
//!
//! The digest is a legacy construction kept for its exact, well-known
//! output. It is not a safe password hash for hostile settings.

pub mod dispatch;
pub mod hash;
pub mod primitives;
pub mod session;
pub mod table;
