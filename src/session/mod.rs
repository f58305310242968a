//! Login sessions over a credential table.
//!
//! A [`Session`] is the explicit context that owns one
//! [`CredentialTable`](crate::table::CredentialTable) and remembers which
//! user, if any, is logged in. Callers create one session and pass it to
//! every operation; the crate keeps no process-wide state.

mod core;
mod error;

pub use self::core::{EditField, Session};
pub use error::SessionError;
