//! Primitive types
//!
//! This module defines the low-level value types shared by the hashing and
//! storage layers of the crate.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics. They carry no behaviour beyond construction, comparison,
//! conversion and rendering.
//!
//! Current primitives include:
//! - `Digest`: a fixed-size 128-bit message digest

mod conv;
mod digest;

/// Fixed-size 128-bit digest value and its parse error.
pub use digest::{Digest, ParseDigestError};
