//! Conversions between `Digest` and byte representations
//!
//! The byte form is the canonical output order of the digest: it is exactly
//! the sequence rendered as hexadecimal.

use crate::primitives::Digest;

/// Converts a `Digest` into its 16 output bytes.
impl From<Digest> for [u8; 16] {
    fn from(value: Digest) -> Self {
        value.0
    }
}

/// Wraps 16 output bytes as a `Digest`.
impl From<[u8; 16]> for Digest {
    fn from(value: [u8; 16]) -> Self {
        Digest(value)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Attempts to build a `Digest` from a byte slice.
///
/// Fails unless the slice is exactly 16 bytes long.
impl TryFrom<&[u8]> for Digest {
    type Error = ();

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 16] = value.try_into().map_err(|_| ())?;

        Ok(Digest(bytes))
    }
}
