use crate::commons::math::random::{
    ByteRandomGenerator, RandomGenerable, RandomGenerator, Seed, SeedError, Seeder, Uniform,
};

/// A seeder backed by a CSPRNG.
///
/// The seeder handed by the user to an engine may be arbitrarily slow, so the engine only asks it
/// for a single seed, used to seed this CSPRNG. The seeds of every other generator of the engine
/// are then drawn from it.
///
/// Seeding several generators from a CSPRNG is safe as long as the CSPRNG itself was seeded from
/// an entropy source. The output of this seeder is completely determined by its seed: it must
/// only be used with a public seed for testing or reproducibility purposes.
pub struct DeterministicSeeder<G: ByteRandomGenerator> {
    generator: RandomGenerator<G>,
}

impl<G: ByteRandomGenerator> DeterministicSeeder<G> {
    pub fn new(seed: Seed) -> DeterministicSeeder<G> {
        DeterministicSeeder {
            generator: RandomGenerator::new(seed),
        }
    }
}

impl<G: ByteRandomGenerator> Seeder for DeterministicSeeder<G> {
    fn seed(&mut self) -> Result<Seed, SeedError> {
        Ok(Seed(u128::generate_one(&mut self.generator, Uniform)))
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

    #[test]
    fn same_seed_same_sequence() {
        let mut first = DeterministicSeeder::<DefaultRandomGenerator>::new(Seed(42));
        let mut second = DeterministicSeeder::<DefaultRandomGenerator>::new(Seed(42));
        for _ in 0..100 {
            assert_eq!(first.seed().unwrap(), second.seed().unwrap());
        }
    }

    #[test]
    fn successive_seeds_differ() {
        let mut seeder = DeterministicSeeder::<DefaultRandomGenerator>::new(Seed(0));
        let first = seeder.seed().unwrap();
        let second = seeder.seed().unwrap();
        assert_ne!(first, second);
    }
}
