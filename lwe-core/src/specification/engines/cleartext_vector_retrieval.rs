use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::CleartextVectorEntity;

engine_error! {
    CleartextVectorRetrievalError for CleartextVectorRetrievalEngine @
}

/// A trait for engines retrieving the arbitrary values stored in a cleartext vector.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation returns a vector containing copies of the
/// values the `cleartext_vector` was created from, in the same order.
pub trait CleartextVectorRetrievalEngine<CleartextVector, Value>: AbstractEngine
where
    CleartextVector: CleartextVectorEntity,
{
    /// Retrieves the values stored in a cleartext vector.
    fn retrieve_cleartext_vector(
        &mut self,
        cleartext_vector: &CleartextVector,
    ) -> Result<Vec<Value>, CleartextVectorRetrievalError<Self::EngineError>>;

    /// Unchecked version of [`Self::retrieve_cleartext_vector`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`CleartextVectorRetrievalError`] variants.
    unsafe fn retrieve_cleartext_vector_unchecked(
        &mut self,
        cleartext_vector: &CleartextVector,
    ) -> Vec<Value>;
}
