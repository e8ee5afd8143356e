use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::CleartextEntity;

engine_error! {
    CleartextCreationError for CleartextCreationEngine @
}

/// A trait for engines creating cleartexts from an arbitrary value.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a cleartext from the `value`
/// arbitrary value. By arbitrary here, we mean that `Value` can be any type that suits the backend
/// implementor.
pub trait CleartextCreationEngine<Value, Cleartext>: AbstractEngine
where
    Cleartext: CleartextEntity,
{
    /// Creates a cleartext from an arbitrary value.
    fn create_cleartext_from(
        &mut self,
        value: &Value,
    ) -> Result<Cleartext, CleartextCreationError<Self::EngineError>>;

    /// Unchecked version of [`Self::create_cleartext_from`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`CleartextCreationError`] variants.
    unsafe fn create_cleartext_from_unchecked(&mut self, value: &Value) -> Cleartext;
}
