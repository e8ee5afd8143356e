//! Sampling of the random values used by key generation and encryption.
//!
//! Every sample is drawn through a [`RandomGenerator`], a thin layer over a CSPRNG of the
//! `lwe-csprng` crate. The distributions in use are:
//!
//! + [`Uniform`] for the masks.
//! + [`UniformBinary`] for the secret keys.
//! + [`Gaussian`] for the noise.
use crate::commons::numeric::FloatingPoint;

pub use gaussian::*;
pub use generator::*;
pub use lwe_csprng::generators::DefaultRandomGenerator;
pub use lwe_csprng::seeders::{Seed, SeedError, Seeder};
pub use uniform::*;
pub use uniform_binary::*;


mod gaussian;
mod generator;
mod uniform;
mod uniform_binary;

/// Implemented by the types that can be sampled from the distribution `D`.
pub trait RandomGenerable<D: Distribution>: Sized {
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        distribution: D,
    ) -> Self;

    fn fill_slice<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        distribution: D,
        slice: &mut [Self],
    ) {
        slice
            .iter_mut()
            .for_each(|sample| *sample = Self::generate_one(generator, distribution));
    }
}

/// Marker for the distributions above. Sealed.
pub trait Distribution: private::Sealed + Copy {}

mod private {
    pub trait Sealed {}
}

impl private::Sealed for Uniform {}
impl private::Sealed for UniformBinary {}
impl<T: FloatingPoint> private::Sealed for Gaussian<T> {}
impl Distribution for Uniform {}
impl Distribution for UniformBinary {}
impl<T: FloatingPoint> Distribution for Gaussian<T> {}
