use super::engine_error;
use crate::commons::dispersion::{DispersionParameter, Variance};
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{
    LweCiphertextVectorEntity, LweSecretKeyEntity, PlaintextVectorEntity,
};

engine_error! {
    LweCiphertextVectorEncryptionError for LweCiphertextVectorEncryptionEngine @
    InvalidVariance => "The noise variance must be finite and non-negative."
}

impl<EngineError: std::error::Error> LweCiphertextVectorEncryptionError<EngineError> {
    /// Runs the checks shared by every backend.
    pub fn perform_generic_checks(noise: Variance) -> Result<(), Self> {
        if !noise.is_valid() {
            return Err(Self::InvalidVariance);
        }
        Ok(())
    }
}

/// A trait for engines encrypting LWE ciphertext vectors.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates an LWE ciphertext vector containing
/// the element-wise encryption of the `input` plaintext vector, under the `key` secret key. Every
/// ciphertext gets its own mask and its own noise.
///
/// The underlying scheme is described on
/// [`LweCiphertextEncryptionEngine`](crate::specification::engines::LweCiphertextEncryptionEngine).
pub trait LweCiphertextVectorEncryptionEngine<SecretKey, PlaintextVector, CiphertextVector>:
    AbstractEngine
where
    SecretKey: LweSecretKeyEntity,
    PlaintextVector: PlaintextVectorEntity,
    CiphertextVector: LweCiphertextVectorEntity,
{
    /// Encrypts an LWE ciphertext vector.
    fn encrypt_lwe_ciphertext_vector(
        &mut self,
        key: &SecretKey,
        input: &PlaintextVector,
        noise: Variance,
    ) -> Result<CiphertextVector, LweCiphertextVectorEncryptionError<Self::EngineError>>;

    /// Unchecked version of [`Self::encrypt_lwe_ciphertext_vector`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic
    /// [`LweCiphertextVectorEncryptionError`] variants.
    unsafe fn encrypt_lwe_ciphertext_vector_unchecked(
        &mut self,
        key: &SecretKey,
        input: &PlaintextVector,
        noise: Variance,
    ) -> CiphertextVector;
}
