use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::LweCiphertextEntity;

engine_error! {
    LweCiphertextConsumingRetrievalError for LweCiphertextConsumingRetrievalEngine @
}

/// A trait for engines retrieving the content of the container from an LWE ciphertext consuming
/// it in the process.
///
/// # Semantics
///
/// This [consuming](super#operation-semantics) operation retrieves the container of the
/// `ciphertext` LWE ciphertext, i.e. its mask followed by its body.
pub trait LweCiphertextConsumingRetrievalEngine<Ciphertext, Container>: AbstractEngine
where
    Ciphertext: LweCiphertextEntity,
{
    /// Retrieves the content of the container from an LWE ciphertext, consuming it in the
    /// process.
    fn consume_retrieve_lwe_ciphertext(
        &mut self,
        ciphertext: Ciphertext,
    ) -> Result<Container, LweCiphertextConsumingRetrievalError<Self::EngineError>>;

    /// Unchecked version of [`Self::consume_retrieve_lwe_ciphertext`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic
    /// [`LweCiphertextConsumingRetrievalError`] variants.
    unsafe fn consume_retrieve_lwe_ciphertext_unchecked(
        &mut self,
        ciphertext: Ciphertext,
    ) -> Container;
}
