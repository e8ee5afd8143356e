use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::PlaintextVectorEntity;

engine_error! {
    PlaintextVectorRetrievalError for PlaintextVectorRetrievalEngine @
}

/// A trait for engines retrieving the arbitrary values stored in a plaintext vector.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation returns a vector containing copies of the
/// raw values stored in the `plaintext_vector`, in the same order.
pub trait PlaintextVectorRetrievalEngine<PlaintextVector, Value>: AbstractEngine
where
    PlaintextVector: PlaintextVectorEntity,
{
    /// Retrieves the values stored in a plaintext vector.
    fn retrieve_plaintext_vector(
        &mut self,
        plaintext_vector: &PlaintextVector,
    ) -> Result<Vec<Value>, PlaintextVectorRetrievalError<Self::EngineError>>;

    /// Unchecked version of [`Self::retrieve_plaintext_vector`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`PlaintextVectorRetrievalError`] variants.
    unsafe fn retrieve_plaintext_vector_unchecked(
        &mut self,
        plaintext_vector: &PlaintextVector,
    ) -> Vec<Value>;
}
