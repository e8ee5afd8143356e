use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{
    LweCiphertextEntity, LweSecretKeyEntity, PlaintextEntity,
};

engine_error! {
    LweCiphertextDecryptionError for LweCiphertextDecryptionEngine @
    LweDimensionMismatch => "The key and ciphertext LWE dimensions must be the same."
}

impl<EngineError: std::error::Error> LweCiphertextDecryptionError<EngineError> {
    /// Runs the checks shared by every backend.
    pub fn perform_generic_checks<SecretKey, Ciphertext>(
        key: &SecretKey,
        input: &Ciphertext,
    ) -> Result<(), Self>
    where
        SecretKey: LweSecretKeyEntity,
        Ciphertext: LweCiphertextEntity,
    {
        if key.lwe_dimension() != input.lwe_dimension() {
            return Err(Self::LweDimensionMismatch);
        }
        Ok(())
    }
}

/// A trait for engines decrypting LWE ciphertexts.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a plaintext containing the
/// decryption of the `input` LWE ciphertext, under the `key` secret key. The plaintext still
/// contains the encryption noise.
///
/// Decrypting with a key of the right dimension which is not the encryption key succeeds and
/// returns a meaningless plaintext: this can not be detected.
///
/// # Formal Definition
///
/// The decryption of $(\vec{a}, b)$ under $\vec{s}$ is $b - \langle \vec{a}, \vec{s} \rangle
/// \bmod q$, that is the encrypted plaintext plus the noise drawn at encryption.
pub trait LweCiphertextDecryptionEngine<SecretKey, Ciphertext, Plaintext>: AbstractEngine
where
    SecretKey: LweSecretKeyEntity,
    Ciphertext: LweCiphertextEntity,
    Plaintext: PlaintextEntity,
{
    /// Decrypts an LWE ciphertext.
    fn decrypt_lwe_ciphertext(
        &mut self,
        key: &SecretKey,
        input: &Ciphertext,
    ) -> Result<Plaintext, LweCiphertextDecryptionError<Self::EngineError>>;

    /// Unchecked version of [`Self::decrypt_lwe_ciphertext`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`LweCiphertextDecryptionError`] variants.
    unsafe fn decrypt_lwe_ciphertext_unchecked(
        &mut self,
        key: &SecretKey,
        input: &Ciphertext,
    ) -> Plaintext;
}
