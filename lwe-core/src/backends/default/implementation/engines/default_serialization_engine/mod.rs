use crate::specification::engines::sealed::AbstractEngineSeal;
use crate::specification::engines::AbstractEngine;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error which can occur in the execution of FHE operations, due to the default serialization
/// implementation.
#[derive(Debug)]
pub enum DefaultSerializationError {
    Deserialization(bincode::Error),
    Serialization(bincode::Error),
    UnsupportedVersion,
    /// The payload decoded, but describes an entity no creation engine would produce.
    InvalidEntity,
}

impl Display for DefaultSerializationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultSerializationError::Deserialization(bincode_error) => {
                write!(f, "Failed to deserialize entity: {bincode_error}")
            }
            DefaultSerializationError::Serialization(bincode_error) => {
                write!(f, "Failed to serialize entity: {bincode_error}")
            }
            DefaultSerializationError::UnsupportedVersion => {
                write!(
                    f,
                    "The version used to serialize the entity is not supported."
                )
            }
            DefaultSerializationError::InvalidEntity => {
                write!(f, "The deserialized entity is malformed.")
            }
        }
    }
}

impl Error for DefaultSerializationError {}

/// The serialization engine exposed by the default backend.
///
/// Entities are written with `bincode`, prefixed by a version tag so that payloads produced by a
/// newer layout are rejected instead of being misread. Decoded entities go through the same
/// structural checks as the creation engines.
///
/// # Example:
/// ```
/// use lwe_core::prelude::*;
/// # use std::error::Error;
///
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
/// let key: LweSecretKey32 = engine.generate_new_lwe_secret_key(LweDimension(6))?;
/// let plaintexts = engine.create_plaintext_vector_from(&[3_u32 << 20; 3])?;
/// let ciphertexts: LweCiphertextVector32 =
///     engine.encrypt_lwe_ciphertext_vector(&key, &plaintexts, Variance(2_f64.powi(-25)))?;
///
/// let mut serialization_engine = DefaultSerializationEngine::new(())?;
/// let serialized = serialization_engine.serialize(&ciphertexts)?;
/// let recovered: LweCiphertextVector32 = serialization_engine.deserialize(serialized.as_slice())?;
/// assert_eq!(ciphertexts, recovered);
/// # Ok(())
/// # }
/// ```
pub struct DefaultSerializationEngine;

impl AbstractEngineSeal for DefaultSerializationEngine {}

impl AbstractEngine for DefaultSerializationEngine {
    type EngineError = DefaultSerializationError;

    type Parameters = ();

    fn new(_parameter: Self::Parameters) -> Result<Self, Self::EngineError> {
        Ok(DefaultSerializationEngine)
    }
}

mod entity_deserialization;
mod entity_serialization;
