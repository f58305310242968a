//! 128-bit message digest primitive
//!
//! This module defines `Digest`, the fixed-size fingerprint produced by the
//! crate's hash function and stored alongside every username in the
//! credential table.
//!
//! A digest is a plain value: it is computed once, never mutated, and
//! compared and rendered as 32 lowercase hexadecimal characters. The byte
//! order is the output order of the hash, so the hexadecimal rendering is
//! stable across platforms.

use std::fmt::{Debug, Display, Formatter, Result, Write};
use std::str::FromStr;

use thiserror::Error;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Fixed-size 128-bit digest.
///
/// The value is stored as 16 bytes in hash output order.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest(pub(crate) [u8; 16]);

/// Errors returned when parsing a digest from its hexadecimal rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDigestError {
    /// The input is not exactly 32 characters long.
    #[error("digest must be 32 hex characters, got {0}")]
    InvalidLength(usize),

    /// The input contains a character outside `[0-9a-fA-F]`.
    #[error("invalid hex character {0:?} in digest")]
    InvalidCharacter(char),
}

impl Digest {
    /// Length of the rendered digest in characters.
    pub const HEX_LEN: usize = 32;

    /// Returns the raw digest bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Renders the digest as 32 lowercase hexadecimal characters.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

fn nibble(c: char) -> std::result::Result<u8, ParseDigestError> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or(ParseDigestError::InvalidCharacter(c))
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    /// Parses a digest from 32 hexadecimal characters (either case).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != Self::HEX_LEN {
            return Err(ParseDigestError::InvalidLength(count));
        }

        let mut out = [0u8; 16];
        let mut chars = s.chars();

        for byte in out.iter_mut() {
            // Length was checked above, so both halves are present.
            let (Some(hi), Some(lo)) = (chars.next(), chars.next()) else {
                return Err(ParseDigestError::InvalidLength(count));
            };

            *byte = (nibble(hi)? << 4) | nibble(lo)?;
        }

        Ok(Digest(out))
    }
}

impl Display for Digest {
    /// Formats the digest as 32 lowercase hexadecimal characters.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for &byte in self.0.iter() {
            f.write_char(HEX[(byte >> 4) as usize] as char)?;
            f.write_char(HEX[(byte & 0x0f) as usize] as char)?;
        }

        Ok(())
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Digest({})", self)
    }
}

impl PartialEq<str> for Digest {
    fn eq(&self, other: &str) -> bool {
        other.len() == Self::HEX_LEN && self.to_hex().eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for Digest {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
