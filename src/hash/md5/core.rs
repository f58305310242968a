//! Message digest core hashing functions
//!
//! This module implements the padding, compression and output steps of the
//! RFC 1321 digest.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a complete digest function for arbitrary-length input
//! - a hexadecimal convenience wrapper

use crate::hash::md5::MD5_INIT;
use crate::hash::md5::computations::all_rounds;
use crate::primitives::Digest;

/// Compresses a single 512-bit message block.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (4 × 32-bit words)
///
/// # Notes
/// Input words are interpreted as little-endian.
#[inline(always)]
pub fn compress(block: &[u8; 64], state: &mut [u32; 4]) {
    let mut m = [0u32; 16];

    for (word, chunk) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    all_rounds(state, m);
}

/// Computes the 128-bit digest of the given input.
///
/// Full blocks are compressed straight from the input; only the tail is
/// copied into a scratch block for padding. When the tail leaves fewer than
/// eight bytes for the length suffix, padding spills into a second block.
///
/// # Notes
/// - The message length is encoded as a 64-bit little-endian bit count,
///   taken modulo 2^64.
/// - No heap allocations are performed.
pub fn md5(input: &[u8]) -> Digest {
    let mut state = MD5_INIT;
    let mut block = [0u8; 64];

    let chunks = input.chunks_exact(64);
    let tail = chunks.remainder();

    for chunk in chunks {
        block.copy_from_slice(chunk);
        compress(&block, &mut state);
    }

    let rem = tail.len();

    block = [0u8; 64];
    block[..rem].copy_from_slice(tail);
    block[rem] = 0x80;

    if rem > 55 {
        compress(&block, &mut state);
        block = [0u8; 64];
    }

    let bit_len = (input.len() as u64).wrapping_mul(8);
    block[56..].copy_from_slice(&bit_len.to_le_bytes());

    compress(&block, &mut state);

    Digest::from(state)
}

/// Computes the digest of `input` and renders it as 32 lowercase
/// hexadecimal characters.
pub fn md5_hex(input: &[u8]) -> String {
    md5(input).to_hex()
}
