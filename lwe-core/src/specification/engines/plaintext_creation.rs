use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::PlaintextEntity;

engine_error! {
    PlaintextCreationError for PlaintextCreationEngine @
}

/// A trait for engines creating plaintexts from an arbitrary value.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a plaintext from the `value`
/// arbitrary value. By arbitrary here, we mean that `Value` can be any type that suits the backend
/// implementor (an integer, a struct wrapping integers, or any other thing). The value is taken
/// as is: no encoding is performed.
pub trait PlaintextCreationEngine<Value, Plaintext>: AbstractEngine
where
    Plaintext: PlaintextEntity,
{
    /// Creates a plaintext from an arbitrary value.
    fn create_plaintext_from(
        &mut self,
        value: &Value,
    ) -> Result<Plaintext, PlaintextCreationError<Self::EngineError>>;

    /// Unchecked version of [`Self::create_plaintext_from`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`PlaintextCreationError`] variants.
    unsafe fn create_plaintext_from_unchecked(&mut self, value: &Value) -> Plaintext;
}
