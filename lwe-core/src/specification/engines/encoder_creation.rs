use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::EncoderEntity;

engine_error! {
    EncoderCreationError for EncoderCreationEngine @
}

/// A trait for engines creating encoders from configurations.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation generates an encoder from the `config`
/// configuration. Which configurations are valid depends on the encoder, and is checked by the
/// implementing engine.
pub trait EncoderCreationEngine<Config, Encoder>: AbstractEngine
where
    Encoder: EncoderEntity,
{
    /// Creates an encoder from a config.
    fn create_encoder_from(
        &mut self,
        config: &Config,
    ) -> Result<Encoder, EncoderCreationError<Self::EngineError>>;

    /// Unchecked version of [`Self::create_encoder_from`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`EncoderCreationError`] variants.
    unsafe fn create_encoder_from_unchecked(&mut self, config: &Config) -> Encoder;
}
