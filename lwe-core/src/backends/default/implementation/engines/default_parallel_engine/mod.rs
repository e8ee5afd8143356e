use super::ActivatedRandomGenerator;
use crate::commons::crypto::encoding::PlaintextList as ImplPlaintextList;
use crate::commons::crypto::lwe::LweList as ImplLweList;
use crate::commons::crypto::secret::generators::{
    DeterministicSeeder as ImplDeterministicSeeder,
    EncryptionRandomGenerator as ImplEncryptionRandomGenerator,
};
use crate::commons::crypto::secret::LweSecretKey as ImplLweSecretKey;
use crate::commons::dispersion::Variance;
use crate::commons::math::torus::UnsignedTorus;
use crate::commons::parameters::LweCiphertextCount;
use crate::specification::engines::sealed::AbstractEngineSeal;
use crate::specification::engines::AbstractEngine;
use lwe_csprng::generators::ForkError;
use lwe_csprng::seeders::{SeedError, Seeder};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error which can occur in the execution of FHE operations, due to the default
/// parallel implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultParallelError {
    /// The seeder given at construction failed to produce a seed.
    EntropyUnavailable(SeedError),
    /// The encryption generator could not be split into one child per ciphertext.
    GeneratorFork(ForkError),
}

impl Display for DefaultParallelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultParallelError::EntropyUnavailable(error) => {
                write!(f, "Failed to seed the engine generators: {error}")
            }
            DefaultParallelError::GeneratorFork(error) => {
                write!(f, "Failed to fork the encryption generator: {error}")
            }
        }
    }
}

impl Error for DefaultParallelError {}

impl From<SeedError> for DefaultParallelError {
    fn from(error: SeedError) -> Self {
        DefaultParallelError::EntropyUnavailable(error)
    }
}

/// An engine executing the vector operations of the default backend on the `rayon` thread pool.
///
/// Encryption forks the generators of the engine into one independent child per ciphertext, so
/// the output only depends on the seed of the engine, and not on the scheduling of the threads.
pub struct DefaultParallelEngine {
    /// A structure containing two CSPRNGs to generate material for encryption like public masks
    /// and secret errors.
    ///
    /// The [`ImplEncryptionRandomGenerator`] contains two CSPRNGs, one publicly seeded used to
    /// generate mask coefficients and one privately seeded used to generate errors during
    /// encryption.
    pub(crate) encryption_generator: ImplEncryptionRandomGenerator<ActivatedRandomGenerator>,
}

impl AbstractEngineSeal for DefaultParallelEngine {}

impl AbstractEngine for DefaultParallelEngine {
    type EngineError = DefaultParallelError;

    type Parameters = Box<dyn Seeder>;

    fn new(mut parameters: Self::Parameters) -> Result<Self, Self::EngineError> {
        let mut deterministic_seeder =
            ImplDeterministicSeeder::<ActivatedRandomGenerator>::new(parameters.seed()?);

        let engine = DefaultParallelEngine {
            encryption_generator: ImplEncryptionRandomGenerator::new(
                deterministic_seeder.seed()?,
                deterministic_seeder.seed()?,
            ),
        };
        tracing::debug!("default parallel engine seeded");
        Ok(engine)
    }
}

impl DefaultParallelEngine {
    pub(crate) fn par_encrypt_lwe_list<Scalar>(
        &mut self,
        key: &ImplLweSecretKey<Vec<Scalar>>,
        input: &ImplPlaintextList<Vec<Scalar>>,
        noise: Variance,
    ) -> Result<ImplLweList<Vec<Scalar>>, ForkError>
    where
        Scalar: UnsignedTorus,
    {
        let mut ciphertexts = ImplLweList::allocate(
            Scalar::ZERO,
            key.key_size().to_lwe_size(),
            LweCiphertextCount(input.count().0),
        );
        key.par_encrypt_lwe_list(
            &mut ciphertexts,
            input,
            noise,
            &mut self.encryption_generator,
        )?;
        Ok(ciphertexts)
    }
}

mod lwe_ciphertext_vector_decryption;
mod lwe_ciphertext_vector_encryption;
