use crate::commons::crypto::secret::generators::{
    EncryptionRandomGenerator, SecretRandomGenerator,
};
use crate::commons::math::random::{DefaultRandomGenerator, RandomGenerator, Seed};
use crate::commons::math::torus::UnsignedTorus;

pub fn random_seed() -> Seed {
    Seed(rand::random())
}

pub fn new_random_generator() -> RandomGenerator<DefaultRandomGenerator> {
    RandomGenerator::new(random_seed())
}

pub fn new_secret_random_generator() -> SecretRandomGenerator<DefaultRandomGenerator> {
    SecretRandomGenerator::new(random_seed())
}

pub fn new_encryption_random_generator() -> EncryptionRandomGenerator<DefaultRandomGenerator> {
    EncryptionRandomGenerator::new(random_seed(), random_seed())
}

/// Map a torus element to the centered interval `[-0.5, 0.5[`.
///
/// The upper half of the torus corresponds to the negative domain when mapping unsigned integer
/// back to float (MSB or sign bit is set).
pub fn torus_to_centered<T: UnsignedTorus>(value: T) -> f64 {
    let torus = value.into_torus();
    if torus >= 0.5 {
        torus - 1.
    } else {
        torus
    }
}

/// Return the empirical mean and variance of the samples.
pub fn mean_and_variance(samples: &[f64]) -> (f64, f64) {
    let count = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / count;
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (count - 1.);
    (mean, variance)
}
