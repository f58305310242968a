//! Hash algorithms exposed by the crate.
//!
//! Currently includes a pure-Rust implementation of the RFC 1321 message
//! digest, used to fingerprint stored passwords.

pub mod md5;

/// Re-export of the digest convenience functions.
pub use self::md5::core::{md5, md5_hex};
