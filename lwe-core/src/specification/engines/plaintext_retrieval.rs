use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::PlaintextEntity;

engine_error! {
    PlaintextRetrievalError for PlaintextRetrievalEngine @
}

/// A trait for engines retrieving the arbitrary value stored in a plaintext.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation returns a copy of the raw value stored in the
/// `plaintext`. No decoding is performed.
pub trait PlaintextRetrievalEngine<Plaintext, Value>: AbstractEngine
where
    Plaintext: PlaintextEntity,
{
    /// Retrieves the value stored in a plaintext.
    fn retrieve_plaintext(
        &mut self,
        plaintext: &Plaintext,
    ) -> Result<Value, PlaintextRetrievalError<Self::EngineError>>;

    /// Unchecked version of [`Self::retrieve_plaintext`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`PlaintextRetrievalError`] variants.
    unsafe fn retrieve_plaintext_unchecked(&mut self, plaintext: &Plaintext) -> Value;
}
