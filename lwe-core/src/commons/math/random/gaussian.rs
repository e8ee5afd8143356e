use super::*;
use crate::commons::math::torus::FromTorus;

/// A distribution type representing random sampling of floating point numbers, following a
/// gaussian distribution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gaussian<T: FloatingPoint> {
    /// The standard deviation of the distribution.
    pub std: T,
    /// The mean of the distribution.
    pub mean: T,
}

/// The number of bytes consumed by one attempt of the polar method: two 64 bits uniform values.
pub(crate) const BYTES_PER_GAUSSIAN_ATTEMPT: usize = 2 * std::mem::size_of::<u64>();

impl RandomGenerable<Gaussian<f64>> for (f64, f64) {
    fn generate_one<G: ByteRandomGenerator>(
        generator: &mut RandomGenerator<G>,
        Gaussian { std, mean }: Gaussian<f64>,
    ) -> Self {
        // Marsaglia polar method: draw points uniformly in the square [-1, 1[ x [-1, 1[ until one
        // falls in the unit disk, then map it to a pair of independent gaussian samples.
        let mut uniform_rand_bytes_u = [0u8; 8];
        let mut uniform_rand_bytes_v = [0u8; 8];
        loop {
            uniform_rand_bytes_u
                .iter_mut()
                .for_each(|a| *a = generator.generate_next());
            uniform_rand_bytes_v
                .iter_mut()
                .for_each(|a| *a = generator.generate_next());
            let u = i64::from_le_bytes(uniform_rand_bytes_u) as f64 * 2_f64.powi(-63);
            let v = i64::from_le_bytes(uniform_rand_bytes_v) as f64 * 2_f64.powi(-63);
            let s = u * u + v * v;
            if s > 0. && s < 1. {
                let cst = std * (-2. * s.ln() / s).sqrt();
                return (u * cst + mean, v * cst + mean);
            }
        }
    }
}

macro_rules! implement_gaussian_torus {
    ($T:ty) => {
        impl RandomGenerable<Gaussian<f64>> for ($T, $T) {
            fn generate_one<G: ByteRandomGenerator>(
                generator: &mut RandomGenerator<G>,
                distribution: Gaussian<f64>,
            ) -> Self {
                let (s1, s2) = <(f64, f64)>::generate_one(generator, distribution);
                (<$T>::from_torus(s1), <$T>::from_torus(s2))
            }
        }

        impl RandomGenerable<Gaussian<f64>> for $T {
            fn generate_one<G: ByteRandomGenerator>(
                generator: &mut RandomGenerator<G>,
                distribution: Gaussian<f64>,
            ) -> Self {
                <($T, $T)>::generate_one(generator, distribution).0
            }
        }
    };
}

implement_gaussian_torus!(u32);
implement_gaussian_torus!(u64);
