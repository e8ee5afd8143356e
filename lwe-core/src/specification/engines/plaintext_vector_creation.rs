use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::PlaintextVectorEntity;

engine_error! {
    PlaintextVectorCreationError for PlaintextVectorCreationEngine @
    EmptyInput => "The input slice must not be empty."
}

impl<EngineError: std::error::Error> PlaintextVectorCreationError<EngineError> {
    /// Runs the checks shared by every backend.
    pub fn perform_generic_checks<Value>(values: &[Value]) -> Result<(), Self> {
        if values.is_empty() {
            return Err(Self::EmptyInput);
        }
        Ok(())
    }
}

/// A trait for engines creating plaintext vectors from a slice of arbitrary values.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a plaintext vector from the
/// `values` slice, preserving the order of its elements.
pub trait PlaintextVectorCreationEngine<Value, PlaintextVector>: AbstractEngine
where
    PlaintextVector: PlaintextVectorEntity,
{
    /// Creates a plaintext vector from a slice of arbitrary values.
    fn create_plaintext_vector_from(
        &mut self,
        values: &[Value],
    ) -> Result<PlaintextVector, PlaintextVectorCreationError<Self::EngineError>>;

    /// Unchecked version of [`Self::create_plaintext_vector_from`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`PlaintextVectorCreationError`] variants.
    unsafe fn create_plaintext_vector_from_unchecked(
        &mut self,
        values: &[Value],
    ) -> PlaintextVector;
}
