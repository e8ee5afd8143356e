use super::engine_error;
use crate::commons::dispersion::{DispersionParameter, Variance};
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{
    LweCiphertextEntity, LweSecretKeyEntity, PlaintextEntity,
};

engine_error! {
    LweCiphertextEncryptionError for LweCiphertextEncryptionEngine @
    InvalidVariance => "The noise variance must be finite and non-negative."
}

impl<EngineError: std::error::Error> LweCiphertextEncryptionError<EngineError> {
    /// Runs the checks shared by every backend.
    pub fn perform_generic_checks(noise: Variance) -> Result<(), Self> {
        if !noise.is_valid() {
            return Err(Self::InvalidVariance);
        }
        Ok(())
    }
}

/// A trait for engines encrypting LWE ciphertexts.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates an LWE ciphertext containing the
/// encryption of the `input` plaintext under the `key` secret key.
///
/// # Formal Definition
///
/// Words are integers modulo $q = 2^w$. Given a plaintext $m$ and a key $\vec{s}$ of dimension
/// $n$, the engine draws a mask $\vec{a}$ uniformly in $\mathbb{Z}\_q^n$ and a noise $e$ from a
/// centered gaussian of the requested variance, then outputs $(\vec{a}, b)$ where
/// $b = \langle \vec{a}, \vec{s} \rangle + m + e \bmod q$.
///
/// The variance is expressed on the torus: a variance of $1$ corresponds to a standard deviation
/// of $q$.
pub trait LweCiphertextEncryptionEngine<SecretKey, Plaintext, Ciphertext>: AbstractEngine
where
    SecretKey: LweSecretKeyEntity,
    Plaintext: PlaintextEntity,
    Ciphertext: LweCiphertextEntity,
{
    /// Encrypts an LWE ciphertext.
    fn encrypt_lwe_ciphertext(
        &mut self,
        key: &SecretKey,
        input: &Plaintext,
        noise: Variance,
    ) -> Result<Ciphertext, LweCiphertextEncryptionError<Self::EngineError>>;

    /// Unchecked version of [`Self::encrypt_lwe_ciphertext`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`LweCiphertextEncryptionError`] variants.
    unsafe fn encrypt_lwe_ciphertext_unchecked(
        &mut self,
        key: &SecretKey,
        input: &Plaintext,
        noise: Variance,
    ) -> Ciphertext;
}
