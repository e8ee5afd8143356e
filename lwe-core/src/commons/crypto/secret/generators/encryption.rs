use crate::commons::dispersion::DispersionParameter;
use crate::commons::math::random::{
    ByteRandomGenerator, Gaussian, ParallelByteRandomGenerator, RandomGenerable, RandomGenerator,
    Seed, Uniform, BYTES_PER_GAUSSIAN_ATTEMPT,
};
use crate::commons::numeric::UnsignedInteger;
use crate::commons::parameters::{LweCiphertextCount, LweDimension};
use lwe_csprng::generators::ForkError;
use rayon::prelude::*;

// The number of bytes given to each forked noise generator, per gaussian sample. The gaussian
// sampler rejects a fraction of its draws, so a child needs more than one attempt worth of bytes.
const NOISE_ATTEMPTS_PER_SAMPLE: usize = 1024;

/// A random number generator used for encryption.
///
/// It holds two independent CSPRNGs: one publicly seeded, generating the masks, and one privately
/// seeded, generating the noise.
pub struct EncryptionRandomGenerator<G: ByteRandomGenerator> {
    mask: RandomGenerator<G>,
    noise: RandomGenerator<G>,
}

impl<G: ByteRandomGenerator> EncryptionRandomGenerator<G> {
    pub fn new(mask_seed: Seed, noise_seed: Seed) -> EncryptionRandomGenerator<G> {
        EncryptionRandomGenerator {
            mask: RandomGenerator::new(mask_seed),
            noise: RandomGenerator::new(noise_seed),
        }
    }

    /// Return the number of bytes the mask generator can still output.
    pub fn remaining_bytes(&self) -> u128 {
        self.mask.remaining_bytes()
    }

    // Forks the generator into one child per ciphertext of an lwe list.
    pub(crate) fn fork_lwe_list_to_lwe<T: UnsignedInteger>(
        &mut self,
        lwe_count: LweCiphertextCount,
        lwe_dimension: LweDimension,
    ) -> Result<impl Iterator<Item = EncryptionRandomGenerator<G>>, ForkError> {
        let mask_bytes = mask_bytes_per_lwe::<T>(lwe_dimension);
        let noise_bytes = noise_bytes_per_lwe();
        self.try_fork(lwe_count.0, mask_bytes, noise_bytes)
    }

    fn try_fork(
        &mut self,
        n_child: usize,
        mask_bytes: usize,
        noise_bytes: usize,
    ) -> Result<impl Iterator<Item = EncryptionRandomGenerator<G>>, ForkError> {
        let mask_iter = self.mask.try_fork(n_child, mask_bytes)?;
        let noise_iter = self.noise.try_fork(n_child, noise_bytes)?;
        Ok(mask_iter
            .zip(noise_iter)
            .map(|(mask, noise)| EncryptionRandomGenerator { mask, noise }))
    }

    // Fills the slice with random uniform values, using the mask generator.
    pub(crate) fn fill_slice_with_random_mask<Scalar>(&mut self, output: &mut [Scalar])
    where
        Scalar: RandomGenerable<Uniform>,
    {
        self.mask.fill_slice_with_random_uniform(output)
    }

    // Samples a noise value, using the noise generator.
    pub(crate) fn random_noise<Scalar>(&mut self, noise: impl DispersionParameter) -> Scalar
    where
        Scalar: RandomGenerable<Gaussian<f64>>,
    {
        Scalar::generate_one(
            &mut self.noise,
            Gaussian {
                std: noise.get_standard_dev(),
                mean: 0.,
            },
        )
    }
}

impl<G: ParallelByteRandomGenerator> EncryptionRandomGenerator<G> {
    // Forks the generator into a parallel iterator of one child per ciphertext of an lwe list.
    pub(crate) fn par_fork_lwe_list_to_lwe<T: UnsignedInteger>(
        &mut self,
        lwe_count: LweCiphertextCount,
        lwe_dimension: LweDimension,
    ) -> Result<impl IndexedParallelIterator<Item = EncryptionRandomGenerator<G>>, ForkError> {
        let mask_bytes = mask_bytes_per_lwe::<T>(lwe_dimension);
        let noise_bytes = noise_bytes_per_lwe();
        self.par_try_fork(lwe_count.0, mask_bytes, noise_bytes)
    }

    fn par_try_fork(
        &mut self,
        n_child: usize,
        mask_bytes: usize,
        noise_bytes: usize,
    ) -> Result<impl IndexedParallelIterator<Item = EncryptionRandomGenerator<G>>, ForkError> {
        let mask_iter = self.mask.par_try_fork(n_child, mask_bytes)?;
        let noise_iter = self.noise.par_try_fork(n_child, noise_bytes)?;
        Ok(mask_iter
            .zip(noise_iter)
            .map(|(mask, noise)| EncryptionRandomGenerator { mask, noise }))
    }
}

fn mask_bytes_per_lwe<T: UnsignedInteger>(lwe_dimension: LweDimension) -> usize {
    lwe_dimension.0 * T::BYTES
}

fn noise_bytes_per_lwe() -> usize {
    NOISE_ATTEMPTS_PER_SAMPLE * BYTES_PER_GAUSSIAN_ATTEMPT
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::commons::dispersion::Variance;
    use crate::commons::math::random::DefaultRandomGenerator;

    #[test]
    fn forked_children_mask_bytes_are_exact() {
        let mut generator =
            EncryptionRandomGenerator::<DefaultRandomGenerator>::new(Seed(1), Seed(2));
        for mut child in generator
            .fork_lwe_list_to_lwe::<u64>(LweCiphertextCount(4), LweDimension(16))
            .unwrap()
        {
            assert_eq!(child.remaining_bytes(), 16 * 8);
            let mut mask = vec![0_u64; 16];
            child.fill_slice_with_random_mask(&mut mask);
            assert_eq!(child.remaining_bytes(), 0);
            let _: u64 = child.random_noise(Variance(2_f64.powi(-50)));
        }
    }

    #[test]
    fn parallel_and_sequential_forks_agree() {
        let mut sequential =
            EncryptionRandomGenerator::<DefaultRandomGenerator>::new(Seed(7), Seed(8));
        let mut parallel =
            EncryptionRandomGenerator::<DefaultRandomGenerator>::new(Seed(7), Seed(8));
        let sequential_masks: Vec<Vec<u32>> = sequential
            .fork_lwe_list_to_lwe::<u32>(LweCiphertextCount(3), LweDimension(5))
            .unwrap()
            .map(|mut child| {
                let mut mask = vec![0_u32; 5];
                child.fill_slice_with_random_mask(&mut mask);
                mask
            })
            .collect();
        let parallel_masks: Vec<Vec<u32>> = parallel
            .par_fork_lwe_list_to_lwe::<u32>(LweCiphertextCount(3), LweDimension(5))
            .unwrap()
            .map(|mut child| {
                let mut mask = vec![0_u32; 5];
                child.fill_slice_with_random_mask(&mut mask);
                mask
            })
            .collect();
        assert_eq!(sequential_masks, parallel_masks);
    }
}
