use crate::commons::math::random::{ByteRandomGenerator, RandomGenerator, Seed};
use crate::commons::math::torus::UnsignedTorus;

/// A random number generator which can be used to generate secret keys.
pub struct SecretRandomGenerator<G: ByteRandomGenerator>(RandomGenerator<G>);

impl<G: ByteRandomGenerator> SecretRandomGenerator<G> {
    /// Create a new generator, optionally seeding it with the given value.
    pub fn new(seed: Seed) -> SecretRandomGenerator<G> {
        SecretRandomGenerator(RandomGenerator::new(seed))
    }

    /// Return the number of remaining bytes, if the generator is bounded.
    pub fn remaining_bytes(&self) -> u128 {
        self.0.remaining_bytes()
    }

    // Returns a vector of `length` random binary values.
    pub(crate) fn random_binary_vec<Scalar>(&mut self, length: usize) -> Vec<Scalar>
    where
        Scalar: UnsignedTorus,
    {
        let mut output = vec![Scalar::ZERO; length];
        self.0.fill_slice_with_random_uniform_binary(&mut output);
        output
    }
}
