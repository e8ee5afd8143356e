use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{CleartextEntity, EncoderEntity, PlaintextEntity};

engine_error! {
    CleartextEncodingError for CleartextEncodingEngine @
}

/// A trait for engines encoding cleartexts.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a plaintext containing the
/// encoding of the `cleartext`, using the `encoder`.
pub trait CleartextEncodingEngine<Encoder, Cleartext, Plaintext>: AbstractEngine
where
    Encoder: EncoderEntity,
    Cleartext: CleartextEntity,
    Plaintext: PlaintextEntity,
{
    /// Encodes a cleartext into a plaintext.
    fn encode_cleartext(
        &mut self,
        encoder: &Encoder,
        cleartext: &Cleartext,
    ) -> Result<Plaintext, CleartextEncodingError<Self::EngineError>>;

    /// Unchecked version of [`Self::encode_cleartext`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`CleartextEncodingError`] variants.
    unsafe fn encode_cleartext_unchecked(
        &mut self,
        encoder: &Encoder,
        cleartext: &Cleartext,
    ) -> Plaintext;
}
