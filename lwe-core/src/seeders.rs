//! This module contains methods to get a random seed.
//!
//! Seeding depends on the underlying OS/hardware. Here, several strategies are proposed to
//! (securely) obtain a seed, which is then used to seed the cryptographically secure pseudo random
//! number generators of the engines.

pub use crate::commons::crypto::secret::generators::DeterministicSeeder;
pub use crate::commons::math::random::{Seed, SeedError, Seeder};
#[cfg(target_arch = "x86_64")]
pub use lwe_csprng::seeders::RdseedSeeder;
pub use lwe_csprng::seeders::UnixSeeder;
use std::sync::{Arc, Mutex};

/// Return an available boxed [`Seeder`] prioritizing hardware entropy sources.
///
/// # Note
///
/// When the `rdseed` CPU feature is detected on `x86_64` CPUs the rdseed seeder is
/// prioritized. Otherwise the operating system entropy source is used, and the quality of the
/// generated seeds depends on the particular implementation of the platform your code is running
/// on.
///
/// # Example
///
/// ```rust
/// use lwe_core::prelude::*;
/// # use std::error::Error;
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut seeder = new_seeder()?;
/// let seeder = seeder.as_mut();
///
/// let first_seed = seeder.seed()?;
/// let second_seed = seeder.seed()?;
/// assert_ne!(first_seed, second_seed);
/// #
/// # Ok(())
/// # }
/// ```
pub fn new_seeder() -> Result<Box<dyn Seeder + Send>, SeedError> {
    #[cfg(target_arch = "x86_64")]
    {
        if RdseedSeeder::is_available() {
            tracing::debug!("using the rdseed seeder");
            return Ok(Box::new(RdseedSeeder::new()));
        }
    }

    if UnixSeeder::is_available() {
        tracing::debug!("using the unix seeder");
        return Ok(Box::new(UnixSeeder::new(0)));
    }

    Err(SeedError::EntropyUnavailable(
        "No compatible seeder for current machine found.".to_string(),
    ))
}

/// Return a boxed [`UnixSeeder`] mixing the operating system entropy with `secret`.
///
/// A warning is emitted when the secret is zero, in which case the seeds only depend on the
/// operating system entropy source.
pub fn new_unix_seeder(secret: u128) -> Box<dyn Seeder + Send> {
    if secret == 0 {
        tracing::warn!("unix seeder built with an all-zero secret");
    }
    Box::new(UnixSeeder::new(secret))
}

/// A seeder that can be cloned and shared between several engines, possibly living on different
/// threads.
///
/// Every clone draws from the same underlying seeder, one seed at a time.
///
/// # Example
///
/// ```rust
/// use lwe_core::prelude::*;
/// # use std::error::Error;
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// // Unix seeder must be given a secret input.
/// // Here we just give it 0, which is totally unsafe.
/// const UNSAFE_SECRET: u128 = 0;
/// let shared = SharedSeeder::new(Box::new(UnixSeeder::new(UNSAFE_SECRET)));
///
/// let mut first_engine = DefaultEngine::new(Box::new(shared.clone()))?;
/// let mut second_engine = DefaultEngine::new(Box::new(shared))?;
/// #
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SharedSeeder(Arc<Mutex<Box<dyn Seeder + Send>>>);

impl SharedSeeder {
    pub fn new(seeder: Box<dyn Seeder + Send>) -> SharedSeeder {
        SharedSeeder(Arc::new(Mutex::new(seeder)))
    }
}

impl Seeder for SharedSeeder {
    fn seed(&mut self) -> Result<Seed, SeedError> {
        let mut seeder = self.0.lock().map_err(|_| {
            SeedError::EntropyUnavailable("The shared seeder lock is poisoned.".to_string())
        })?;
        seeder.seed()
    }

    fn is_available() -> bool
    where
        Self: Sized,
    {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::math::random::DefaultRandomGenerator;
    use std::thread;

    #[test]
    fn new_seeder_produces_distinct_seeds() {
        let mut seeder = new_seeder().unwrap();
        let first = seeder.seed().unwrap();
        let second = seeder.seed().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn shared_seeder_clones_draw_from_the_same_stream() {
        let shared = SharedSeeder::new(Box::new(
            DeterministicSeeder::<DefaultRandomGenerator>::new(Seed(7)),
        ));
        let mut reference = DeterministicSeeder::<DefaultRandomGenerator>::new(Seed(7));

        let mut first = shared.clone();
        let mut second = shared;
        assert_eq!(first.seed().unwrap(), reference.seed().unwrap());
        assert_eq!(second.seed().unwrap(), reference.seed().unwrap());
        assert_eq!(first.seed().unwrap(), reference.seed().unwrap());
    }

    #[test]
    fn shared_seeder_across_threads() {
        let shared = SharedSeeder::new(new_unix_seeder(1));
        let seeds = (0..4)
            .map(|_| {
                let mut seeder = shared.clone();
                thread::spawn(move || seeder.seed().unwrap())
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        for (i, a) in seeds.iter().enumerate() {
            for b in seeds.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
