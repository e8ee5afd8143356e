use crate::seeders::{Seed, SeedError, Seeder};

/// The number of times the `rdseed` instruction is attempted before giving up.
///
/// The instruction reports a transient failure when the hardware entropy pool is drained, in which
/// case Intel recommends retrying a small, bounded number of times.
const RDSEED_ATTEMPTS: usize = 64;

/// A seeder relying on the `rdseed` instruction of x86_64 CPUs.
pub struct RdseedSeeder;

impl RdseedSeeder {
    pub fn new() -> RdseedSeeder {
        RdseedSeeder
    }
}

impl Default for RdseedSeeder {
    fn default() -> Self {
        Self::new()
    }
}

impl Seeder for RdseedSeeder {
    fn seed(&mut self) -> Result<Seed, SeedError> {
        if !Self::is_available() {
            return Err(SeedError::EntropyUnavailable(
                "the rdseed instruction is not supported by this cpu".to_string(),
            ));
        }
        // SAFETY: the availability of rdseed was checked above.
        let low = unsafe { rdseed_64() }?;
        let high = unsafe { rdseed_64() }?;
        Ok(Seed(((high as u128) << 64) | low as u128))
    }

    fn is_available() -> bool {
        is_x86_feature_detected!("rdseed")
    }
}

#[target_feature(enable = "rdseed")]
unsafe fn rdseed_64() -> Result<u64, SeedError> {
    let mut value = 0u64;
    for _ in 0..RDSEED_ATTEMPTS {
        if core::arch::x86_64::_rdseed64_step(&mut value) == 1 {
            return Ok(value);
        }
    }
    Err(SeedError::EntropyUnavailable(
        "the rdseed instruction did not deliver entropy".to_string(),
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::seeders::generic_tests::check_seeder_fixed_sequences_different;

    #[test]
    fn check_bounded_sequence_difference() {
        if RdseedSeeder::is_available() {
            check_seeder_fixed_sequences_different(|_| RdseedSeeder::new());
        }
    }
}
