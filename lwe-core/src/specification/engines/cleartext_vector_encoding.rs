use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::{
    CleartextVectorEntity, EncoderEntity, PlaintextVectorEntity,
};

engine_error! {
    CleartextVectorEncodingError for CleartextVectorEncodingEngine @
}

/// A trait for engines encoding cleartext vectors.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates a plaintext vector containing the
/// element-wise encodings of the `cleartext_vector`, all using the same `encoder`. The output has
/// the length and the order of the input.
pub trait CleartextVectorEncodingEngine<Encoder, CleartextVector, PlaintextVector>:
    AbstractEngine
where
    Encoder: EncoderEntity,
    CleartextVector: CleartextVectorEntity,
    PlaintextVector: PlaintextVectorEntity,
{
    /// Encodes a cleartext vector into a plaintext vector.
    fn encode_cleartext_vector(
        &mut self,
        encoder: &Encoder,
        cleartext_vector: &CleartextVector,
    ) -> Result<PlaintextVector, CleartextVectorEncodingError<Self::EngineError>>;

    /// Unchecked version of [`Self::encode_cleartext_vector`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`CleartextVectorEncodingError`] variants.
    unsafe fn encode_cleartext_vector_unchecked(
        &mut self,
        encoder: &Encoder,
        cleartext_vector: &CleartextVector,
    ) -> PlaintextVector;
}
