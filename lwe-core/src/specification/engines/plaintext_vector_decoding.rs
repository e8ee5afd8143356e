use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{
    CleartextVectorEntity, EncoderEntity, PlaintextVectorEntity,
};

engine_error! {
    PlaintextVectorDecodingError for PlaintextVectorDecodingEngine @
}

/// A trait for engines decoding plaintext vectors.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a cleartext vector containing the
/// element-wise decodings of the `input` plaintext vector, all using the same `encoder`.
pub trait PlaintextVectorDecodingEngine<Encoder, PlaintextVector, CleartextVector>:
    AbstractEngine
where
    Encoder: EncoderEntity,
    PlaintextVector: PlaintextVectorEntity,
    CleartextVector: CleartextVectorEntity,
{
    /// Decodes a plaintext vector.
    fn decode_plaintext_vector(
        &mut self,
        encoder: &Encoder,
        input: &PlaintextVector,
    ) -> Result<CleartextVector, PlaintextVectorDecodingError<Self::EngineError>>;

    /// Unchecked version of [`Self::decode_plaintext_vector`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`PlaintextVectorDecodingError`] variants.
    unsafe fn decode_plaintext_vector_unchecked(
        &mut self,
        encoder: &Encoder,
        input: &PlaintextVector,
    ) -> CleartextVector;
}
