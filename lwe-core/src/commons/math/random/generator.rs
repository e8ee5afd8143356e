use super::{Gaussian, RandomGenerable, Seed, Uniform, UniformBinary};
use crate::commons::numeric::FloatingPoint;
use lwe_csprng::generators::{BytesPerChild, ChildrenCount, ForkError};
use rayon::prelude::*;

pub use lwe_csprng::generators::RandomGenerator as ByteRandomGenerator;
pub use lwe_csprng::generators::ParallelRandomGenerator as ParallelByteRandomGenerator;

/// A cryptographically secure random number generator.
///
/// This csprng is used by every objects that needs sampling in the library. If the underlying
/// [`ByteRandomGenerator`] is bounded (because it is the child of a fork), asking it for more
/// bytes than it can output is a logic error of the caller and panics.
pub struct RandomGenerator<G: ByteRandomGenerator>(G);

impl<G: ByteRandomGenerator> RandomGenerator<G> {
    pub fn new(seed: Seed) -> RandomGenerator<G> {
        RandomGenerator(G::new(seed))
    }

    /// Return the number of bytes the generator can still output, saturating at `u128::MAX`.
    pub fn remaining_bytes(&self) -> u128 {
        self.0.remaining_bytes().0
    }

    /// Return the next byte of the stream.
    pub fn generate_next(&mut self) -> u8 {
        match self.0.next_byte() {
            Some(byte) => byte,
            None => panic!("The random generator was asked for more bytes than it was forked for."),
        }
    }

    /// Try to fork the generator into `n_child` generators able to output `bytes_per_child`
    /// bytes each.
    pub fn try_fork(
        &mut self,
        n_child: usize,
        bytes_per_child: usize,
    ) -> Result<impl Iterator<Item = RandomGenerator<G>>, ForkError> {
        self.0
            .try_fork(ChildrenCount(n_child), BytesPerChild(bytes_per_child))
            .map(|iter| iter.map(Self))
    }

    /// Generate a random scalar using the uniform distribution over all representable values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lwe_core::commons::math::random::{DefaultRandomGenerator, RandomGenerator, Seed};
    /// let mut generator = RandomGenerator::<DefaultRandomGenerator>::new(Seed(0));
    /// let random: u64 = generator.random_uniform();
    /// let other: u64 = generator.random_uniform();
    /// assert_ne!(random, other);
    /// ```
    pub fn random_uniform<Scalar: RandomGenerable<Uniform>>(&mut self) -> Scalar {
        Scalar::generate_one(self, Uniform)
    }

    /// Fill a slice with random uniform values.
    pub fn fill_slice_with_random_uniform<Scalar>(&mut self, output: &mut [Scalar])
    where
        Scalar: RandomGenerable<Uniform>,
    {
        Scalar::fill_slice(self, Uniform, output);
    }

    /// Generate a random uniform binary value.
    pub fn random_uniform_binary<Scalar: RandomGenerable<UniformBinary>>(&mut self) -> Scalar {
        Scalar::generate_one(self, UniformBinary)
    }

    /// Fill a slice with random uniform binary values.
    pub fn fill_slice_with_random_uniform_binary<Scalar>(&mut self, output: &mut [Scalar])
    where
        Scalar: RandomGenerable<UniformBinary>,
    {
        Scalar::fill_slice(self, UniformBinary, output);
    }

    /// Generate two floating point values following a gaussian distribution with the given
    /// mean and standard deviation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lwe_core::commons::math::random::{DefaultRandomGenerator, RandomGenerator, Seed};
    /// let mut generator = RandomGenerator::<DefaultRandomGenerator>::new(Seed(0));
    /// let (g1, g2): (f64, f64) = generator.random_gaussian(0. as f64, 1. as f64);
    /// assert!(g1.is_finite() && g2.is_finite());
    /// ```
    pub fn random_gaussian<Float, Scalar>(&mut self, mean: Float, std: Float) -> (Scalar, Scalar)
    where
        Float: FloatingPoint,
        (Scalar, Scalar): RandomGenerable<Gaussian<Float>>,
    {
        <(Scalar, Scalar)>::generate_one(self, Gaussian { std, mean })
    }

    /// Fill a slice with random gaussian values, two at a time.
    pub fn fill_slice_with_random_gaussian<Float, Scalar>(
        &mut self,
        output: &mut [Scalar],
        mean: Float,
        std: Float,
    ) where
        Float: FloatingPoint,
        (Scalar, Scalar): RandomGenerable<Gaussian<Float>>,
    {
        output.chunks_mut(2).for_each(|s| {
            let (g1, g2) = <(Scalar, Scalar)>::generate_one(self, Gaussian { std, mean });
            if let Some(elem) = s.get_mut(0) {
                *elem = g1;
            }
            if let Some(elem) = s.get_mut(1) {
                *elem = g2;
            }
        });
    }
}

impl<G: ParallelByteRandomGenerator> RandomGenerator<G> {
    /// Try to fork the generator into a parallel iterator of `n_child` generators able to output
    /// `bytes_per_child` bytes each.
    pub fn par_try_fork(
        &mut self,
        n_child: usize,
        bytes_per_child: usize,
    ) -> Result<impl IndexedParallelIterator<Item = RandomGenerator<G>>, ForkError> {
        self.0
            .par_try_fork(ChildrenCount(n_child), BytesPerChild(bytes_per_child))
            .map(|iter| iter.map(Self))
    }
}
