//! Digest conversion utilities
//!
//! This module groups explicit conversions between the fixed-size `Digest`
//! primitive and its raw representations.
//!
//! Each submodule handles a single representation:
//! - `u8`: the 16-byte output order (A, B, C, D, each low byte first)
//! - `u32`: the four little-endian state words produced by the compression
//!   function
//!
//! No conversion truncates or reorders bytes implicitly.

mod u32;
mod u8;
