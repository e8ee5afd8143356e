use crate::seeders::{Seed, SeedError, Seeder};

/// A seeder which uses the system entropy source.
///
/// The entropy is obtained through the `getrandom` crate, which uses the `getrandom` or
/// `getentropy` system calls when they exist and falls back to `/dev/urandom` otherwise.
pub struct UnixSeeder {
    secret: u128,
}

impl UnixSeeder {
    /// Creates a seeder mixing `secret` into every seed.
    ///
    /// The system entropy is xored with `secret`. A process able to predict the kernel random
    /// output, but not to read the memory of this one, then still cannot predict the seeds. A
    /// secret of `0` leaves the system entropy untouched.
    pub fn new(secret: u128) -> UnixSeeder {
        UnixSeeder { secret }
    }
}

impl Seeder for UnixSeeder {
    /// Blocks only while the kernel entropy pool is uninitialized, early at boot.
    fn seed(&mut self) -> Result<Seed, SeedError> {
        let output = self.secret ^ get_system_entropy()?;

        Ok(Seed(output))
    }

    fn is_available() -> bool {
        cfg!(target_family = "unix")
    }
}

fn get_system_entropy() -> Result<u128, SeedError> {
    let mut buf = [0u8; 16];
    getrandom::fill(&mut buf).map_err(|err| SeedError::EntropyUnavailable(err.to_string()))?;
    // Seed exposes the endianness through its pub u128 field, so we always read little endian.
    Ok(u128::from_le_bytes(buf))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seeders::generic_tests::check_seeder_fixed_sequences_different;

    #[test]
    fn check_bounded_sequence_difference() {
        check_seeder_fixed_sequences_different(UnixSeeder::new);
    }

    #[test]
    fn secret_is_mixed_into_seed() {
        // Two seeders with opposite secrets would only agree if the system returned the exact
        // same entropy twice.
        let mut first = UnixSeeder::new(0);
        let mut second = UnixSeeder::new(u128::MAX);
        assert_ne!(first.seed().unwrap(), second.seed().unwrap());
    }
}
