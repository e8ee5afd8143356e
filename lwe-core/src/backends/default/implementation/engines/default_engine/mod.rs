use super::ActivatedRandomGenerator;
use crate::commons::crypto::secret::generators::{
    DeterministicSeeder as ImplDeterministicSeeder,
    EncryptionRandomGenerator as ImplEncryptionRandomGenerator,
    SecretRandomGenerator as ImplSecretRandomGenerator,
};
use crate::specification::engines::sealed::AbstractEngineSeal;
use crate::specification::engines::AbstractEngine;
use lwe_csprng::seeders::{SeedError, Seeder};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error which can occur in the execution of FHE operations, due to the default implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultError {
    /// The seeder given at construction failed to produce a seed.
    EntropyUnavailable(SeedError),
    FloatEncoderMessageOutsideInterval,
    FloatEncoderNullPrecision,
    FloatEncoderMinMaxOrder,
    FloatEncoderNullRadius,
    ShiftEncoderPrecisionTooLarge,
}

impl Display for DefaultError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultError::EntropyUnavailable(error) => {
                write!(f, "Failed to seed the engine generators: {error}")
            }
            DefaultError::FloatEncoderMessageOutsideInterval => write!(
                f,
                "Tried to encode a message outside float encoder interval."
            ),
            DefaultError::FloatEncoderNullPrecision => write!(
                f,
                "Tried to create a float encoder with zero bits of precision."
            ),
            DefaultError::FloatEncoderMinMaxOrder => write!(
                f,
                "Tried to create a float encoder whose min bound is larger than max bound."
            ),
            DefaultError::FloatEncoderNullRadius => {
                write!(f, "Tried to create a float encoder with null radius.")
            }
            DefaultError::ShiftEncoderPrecisionTooLarge => write!(
                f,
                "Tried to create a shift encoder whose precision and sign bit do not fit in a word."
            ),
        }
    }
}

impl Error for DefaultError {}

impl From<SeedError> for DefaultError {
    fn from(error: SeedError) -> Self {
        DefaultError::EntropyUnavailable(error)
    }
}

/// The main engine of the default backend.
///
/// The engine owns the generators used to sample secret keys and encryption randomness. They are
/// all derived from a single seed drawn from the seeder given at construction, which is dropped
/// right after.
pub struct DefaultEngine {
    /// A structure containing a single CSPRNG to generate secret key coefficients.
    secret_generator: ImplSecretRandomGenerator<ActivatedRandomGenerator>,
    /// A structure containing two CSPRNGs to generate material for encryption like public masks
    /// and secret errors.
    ///
    /// The [`ImplEncryptionRandomGenerator`] contains two CSPRNGs, one publicly seeded used to
    /// generate mask coefficients and one privately seeded used to generate errors during
    /// encryption.
    encryption_generator: ImplEncryptionRandomGenerator<ActivatedRandomGenerator>,
}
impl AbstractEngineSeal for DefaultEngine {}

impl AbstractEngine for DefaultEngine {
    type EngineError = DefaultError;

    type Parameters = Box<dyn Seeder>;

    fn new(mut parameters: Self::Parameters) -> Result<Self, Self::EngineError> {
        let mut deterministic_seeder =
            ImplDeterministicSeeder::<ActivatedRandomGenerator>::new(parameters.seed()?);

        // Struct expressions evaluate their operands from left to right, so the secret generator
        // is always seeded first.
        let engine = DefaultEngine {
            secret_generator: ImplSecretRandomGenerator::new(deterministic_seeder.seed()?),
            encryption_generator: ImplEncryptionRandomGenerator::new(
                deterministic_seeder.seed()?,
                deterministic_seeder.seed()?,
            ),
        };
        tracing::debug!("default engine seeded");
        Ok(engine)
    }
}

mod cleartext_creation;
mod cleartext_encoding;
mod cleartext_retrieval;
mod cleartext_vector_creation;
mod cleartext_vector_encoding;
mod cleartext_vector_retrieval;
mod encoder_creation;
mod lwe_ciphertext_consuming_retrieval;
mod lwe_ciphertext_creation;
mod lwe_ciphertext_decryption;
mod lwe_ciphertext_encryption;
mod lwe_ciphertext_vector_consuming_retrieval;
mod lwe_ciphertext_vector_creation;
mod lwe_ciphertext_vector_decryption;
mod lwe_ciphertext_vector_encryption;
mod lwe_secret_key_generation;
mod plaintext_creation;
mod plaintext_decoding;
mod plaintext_retrieval;
mod plaintext_vector_creation;
mod plaintext_vector_decoding;
mod plaintext_vector_retrieval;
