//! Double-hashing probe sequence.
//!
//! A username is reduced to a 32-bit key by summing its code points. The key
//! picks a home row (`key % capacity`) and a step (`P - key % P`), and the
//! probe sequence walks `home, home + step, home + 2 * step, ...` modulo the
//! capacity.
//!
//! With a prime capacity larger than `P`, the step is coprime with the
//! capacity, so the first `capacity` probes are pairwise distinct and cover
//! every row exactly once.

use std::iter::FusedIterator;

/// Indexing hash of a username: the sum of its code points.
///
/// The sum wraps modulo 2^32 instead of overflowing.
pub fn username_key(username: &str) -> u32 {
    username
        .chars()
        .fold(0u32, |acc, c| acc.wrapping_add(u32::from(c)))
}

/// Bounded probe sequence over the rows of a table.
///
/// The iterator yields exactly `capacity` row indices and then stops. It is
/// `Clone`, so a sequence can be restarted from any point.
#[derive(Clone, Debug)]
pub struct ProbeSequence {
    // Row yielded by the next call to `next`.
    index: usize,
    // Distance between consecutive probes.
    step: usize,
    // Number of rows in the table.
    capacity: usize,
    // Probes left before the sequence is exhausted.
    remaining: usize,
}

impl ProbeSequence {
    /// Starts the probe sequence for `key` over a table of `capacity` rows.
    ///
    /// `capacity` must be non-zero and `step_prime` must be non-zero; both
    /// are guaranteed by validated table parameters.
    pub(crate) fn new(key: u32, capacity: usize, step_prime: u32) -> Self {
        debug_assert!(capacity > 0, "probe sequence over zero rows");
        debug_assert!(step_prime > 0, "probe sequence with zero step prime");

        let step = step_prime - key % step_prime;

        ProbeSequence {
            index: key as usize % capacity,
            step: step as usize % capacity,
            capacity,
            remaining: capacity,
        }
    }

    /// Starts the probe sequence for `username`.
    pub fn for_username(username: &str, capacity: usize, step_prime: u32) -> Self {
        Self::new(username_key(username), capacity, step_prime)
    }

    /// Home row of the sequence (the first index it yields).
    pub fn home(&self) -> usize {
        self.index
    }

    /// Distance between consecutive probes.
    pub fn step(&self) -> usize {
        self.step
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }

        let current = self.index;
        self.remaining -= 1;
        self.index = (self.index + self.step) % self.capacity;

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl FusedIterator for ProbeSequence {}
