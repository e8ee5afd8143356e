use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::CleartextEntity;

engine_error! {
    CleartextRetrievalError for CleartextRetrievalEngine @
}

/// A trait for engines retrieving the arbitrary value stored in a cleartext.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation returns a copy of the value the `cleartext`
/// was created from. The cleartext is left untouched.
pub trait CleartextRetrievalEngine<Cleartext, Value>: AbstractEngine
where
    Cleartext: CleartextEntity,
{
    /// Retrieves the value stored in a cleartext.
    fn retrieve_cleartext(
        &mut self,
        cleartext: &Cleartext,
    ) -> Result<Value, CleartextRetrievalError<Self::EngineError>>;

    /// Unchecked version of [`Self::retrieve_cleartext`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`CleartextRetrievalError`] variants.
    unsafe fn retrieve_cleartext_unchecked(&mut self, cleartext: &Cleartext) -> Value;
}
