use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::LweCiphertextVectorEntity;

engine_error! {
    LweCiphertextVectorConsumingRetrievalError for LweCiphertextVectorConsumingRetrievalEngine @
}

/// A trait for engines retrieving the content of the container from an LWE ciphertext vector
/// consuming it in the process.
///
/// # Semantics
///
/// This [consuming](super#operation-semantics) operation retrieves the container of the
/// `ciphertext` LWE ciphertext vector, i.e. the concatenation of its ciphertexts.
pub trait LweCiphertextVectorConsumingRetrievalEngine<CiphertextVector, Container>:
    AbstractEngine
where
    CiphertextVector: LweCiphertextVectorEntity,
{
    /// Retrieves the content of the container from an LWE ciphertext vector, consuming it in the
    /// process.
    fn consume_retrieve_lwe_ciphertext_vector(
        &mut self,
        ciphertext: CiphertextVector,
    ) -> Result<Container, LweCiphertextVectorConsumingRetrievalError<Self::EngineError>>;

    /// Unchecked version of [`Self::consume_retrieve_lwe_ciphertext_vector`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic
    /// [`LweCiphertextVectorConsumingRetrievalError`] variants.
    unsafe fn consume_retrieve_lwe_ciphertext_vector_unchecked(
        &mut self,
        ciphertext: CiphertextVector,
    ) -> Container;
}
