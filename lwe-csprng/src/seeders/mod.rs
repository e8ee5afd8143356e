//! A module containing seeders objects.
//!
//! When initializing a generator, one needs to provide a [`Seed`], which is then used as key to the
//! AES blockcipher. As a consequence, the quality of the outputs of the generator is directly
//! conditioned by the quality of this seed. This module proposes different mechanisms to deliver
//! seeds that can accommodate varying scenarios.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// A seed value, used to initialize a generator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Seed(pub u128);

/// The error raised when a seeder could not draw entropy from its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// The entropy source failed or is exhausted.
    EntropyUnavailable(String),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntropyUnavailable(cause) => {
                write!(f, "The entropy source failed to produce a seed: {cause}")
            }
        }
    }
}

impl Error for SeedError {}

/// A trait representing a seeding strategy.
///
/// A seeder is only ever asked for a handful of seeds (typically once per engine construction), so
/// implementations are free to be slow. A failure is reported as [`SeedError`] and is never retried
/// by the callers.
pub trait Seeder {
    /// Generates a new seed.
    fn seed(&mut self) -> Result<Seed, SeedError>;

    /// Check whether the seeder can be used on the current machine. This function may check if some
    /// required CPU features are available or if some OS features are available for example.
    fn is_available() -> bool
    where
        Self: Sized;
}

mod implem;
pub use implem::*;

#[cfg(test)]
mod generic_tests {
    use crate::seeders::Seeder;

    /// Naively verifies that two fixed-size sequences generated by repeatedly calling the seeder
    /// are different.
    #[allow(unused)] // to please clippy when tests are not activated
    pub fn check_seeder_fixed_sequences_different<S: Seeder, F: Fn(u128) -> S>(
        construct_seeder: F,
    ) {
        const SEQUENCE_SIZE: usize = 500;
        const REPEATS: usize = 100;
        for i in 0..REPEATS {
            let mut seeder = construct_seeder(i as u128);
            let orig_seed = seeder.seed().unwrap();
            for _ in 0..SEQUENCE_SIZE {
                assert_ne!(seeder.seed().unwrap(), orig_seed);
            }
        }
    }
}
