//! Conversions between `Digest` and 32-bit state words
//!
//! The digest state is four 32-bit words A, B, C, D. Each word is serialized
//! low byte first, and the words are concatenated in order, so A's lowest
//! byte is the first output byte and D's highest byte is the last.

use crate::primitives::Digest;

/// Serializes the four state words into a `Digest`.
impl From<[u32; 4]> for Digest {
    fn from(value: [u32; 4]) -> Self {
        let mut out = [0u8; 16];

        for (chunk, word) in out.chunks_exact_mut(4).zip(value) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        Digest(out)
    }
}

/// Recovers the four little-endian state words of a `Digest`.
impl From<Digest> for [u32; 4] {
    fn from(value: Digest) -> Self {
        let mut out = [0u32; 4];

        for (word, chunk) in out.iter_mut().zip(value.0.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        out
    }
}
