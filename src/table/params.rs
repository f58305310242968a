//! Parameter definitions and validation for the credential table.
//!
//! The defaults reproduce the reference sizing: eleven initial rows, growth
//! at a load factor of 0.7 and a secondary-hash prime of 7.

use thiserror::Error;

use super::prime::is_prime;

/// Configuration parameters for a [`CredentialTable`](super::CredentialTable).
///
/// The initial capacity must be a prime strictly greater than
/// `step_prime`. Every probe step then lies in `1..=step_prime` and is
/// coprime with the capacity, so a probe sequence visits every row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableParams {
    /// Number of rows of a freshly created table.
    pub initial_capacity: usize,
    /// Occupancy ratio at or above which the table grows (exclusive bounds 0..1).
    pub load_factor: f64,
    /// Modulus `P` of the secondary hash; probe steps are `P - key % P`.
    pub step_prime: u32,
}

/// Errors that can occur during parameter validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableParamError {
    /// The initial capacity is not a prime number.
    #[error("initial capacity {0} is not prime")]
    CapacityNotPrime(usize),

    /// The initial capacity does not exceed the step prime.
    #[error("initial capacity {capacity} must be greater than step prime {step_prime}")]
    CapacityTooSmall { capacity: usize, step_prime: u32 },

    /// The step prime is zero.
    #[error("step prime must be non-zero")]
    ZeroStepPrime,

    /// The load factor is outside the open interval (0, 1).
    #[error("load factor {0} must lie strictly between 0 and 1")]
    LoadFactorOutOfRange(f64),
}

impl TableParams {
    pub(crate) fn validate(&self) -> Result<(), TableParamError> {
        if self.step_prime == 0 {
            return Err(TableParamError::ZeroStepPrime);
        }

        if !is_prime(self.initial_capacity) {
            return Err(TableParamError::CapacityNotPrime(self.initial_capacity));
        }

        if self.initial_capacity <= self.step_prime as usize {
            return Err(TableParamError::CapacityTooSmall {
                capacity: self.initial_capacity,
                step_prime: self.step_prime,
            });
        }

        if !(self.load_factor > 0.0 && self.load_factor < 1.0) {
            return Err(TableParamError::LoadFactorOutOfRange(self.load_factor));
        }

        Ok(())
    }
}

impl Default for TableParams {
    /// Default parameters: 11 rows, load factor 0.7, step prime 7.
    fn default() -> Self {
        Self {
            initial_capacity: 11,
            load_factor: 0.7,
            step_prime: 7,
        }
    }
}
