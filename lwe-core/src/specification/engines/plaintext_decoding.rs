use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{CleartextEntity, EncoderEntity, PlaintextEntity};

engine_error! {
    PlaintextDecodingError for PlaintextDecodingEngine @
}

/// A trait for engines decoding plaintexts.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a cleartext containing the
/// decoding of the `input` plaintext, using the `encoder`. Decoding is lossy: noise smaller than
/// the precision of the encoder is rounded away.
pub trait PlaintextDecodingEngine<Encoder, Plaintext, Cleartext>: AbstractEngine
where
    Encoder: EncoderEntity,
    Plaintext: PlaintextEntity,
    Cleartext: CleartextEntity,
{
    /// Decodes a plaintext.
    fn decode_plaintext(
        &mut self,
        encoder: &Encoder,
        input: &Plaintext,
    ) -> Result<Cleartext, PlaintextDecodingError<Self::EngineError>>;

    /// Unchecked version of [`Self::decode_plaintext`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`PlaintextDecodingError`] variants.
    unsafe fn decode_plaintext_unchecked(
        &mut self,
        encoder: &Encoder,
        input: &Plaintext,
    ) -> Cleartext;
}
