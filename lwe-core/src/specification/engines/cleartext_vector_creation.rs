use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::CleartextVectorEntity;

engine_error! {
    CleartextVectorCreationError for CleartextVectorCreationEngine @
    EmptyInput => "The input slice must not be empty."
}

impl<EngineError: std::error::Error> CleartextVectorCreationError<EngineError> {
    /// Runs the checks shared by every backend.
    pub fn perform_generic_checks<Value>(values: &[Value]) -> Result<(), Self> {
        if values.is_empty() {
            return Err(Self::EmptyInput);
        }
        Ok(())
    }
}

/// A trait for engines creating cleartext vectors from a slice of arbitrary values.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a cleartext vector from the
/// `values` slice, preserving the order of its elements.
pub trait CleartextVectorCreationEngine<Value, CleartextVector>: AbstractEngine
where
    CleartextVector: CleartextVectorEntity,
{
    /// Creates a cleartext vector from a slice of arbitrary values.
    fn create_cleartext_vector_from(
        &mut self,
        values: &[Value],
    ) -> Result<CleartextVector, CleartextVectorCreationError<Self::EngineError>>;

    /// Unchecked version of [`Self::create_cleartext_vector_from`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`CleartextVectorCreationError`] variants.
    unsafe fn create_cleartext_vector_from_unchecked(
        &mut self,
        values: &[Value],
    ) -> CleartextVector;
}
