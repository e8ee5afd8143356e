use crate::commons::crypto::encoding::Encoder;
use crate::prelude::{
    CleartextF64, DefaultEngine, DefaultError, FloatEncoder, Plaintext32, Plaintext64,
    ShiftEncoder32, ShiftEncoder64,
};
use crate::specification::engines::{CleartextEncodingEngine, CleartextEncodingError};

macro_rules! implement_cleartext_encoding {
    ($(#[$doc:meta])* $Encoder:ident => $Plaintext:ident) => {
        $(#[$doc])*
        impl CleartextEncodingEngine<$Encoder, CleartextF64, $Plaintext> for DefaultEngine {
            fn encode_cleartext(
                &mut self,
                encoder: &$Encoder,
                cleartext: &CleartextF64,
            ) -> Result<$Plaintext, CleartextEncodingError<Self::EngineError>> {
                if !encoder.accepts(cleartext.0 .0) {
                    return Err(CleartextEncodingError::Engine(
                        DefaultError::FloatEncoderMessageOutsideInterval,
                    ));
                }
                Ok(unsafe { self.encode_cleartext_unchecked(encoder, cleartext) })
            }

            unsafe fn encode_cleartext_unchecked(
                &mut self,
                encoder: &$Encoder,
                cleartext: &CleartextF64,
            ) -> $Plaintext {
                $Plaintext(encoder.0.encode(cleartext.0))
            }
        }
    };
}

implement_cleartext_encoding!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let encoder = engine.create_encoder_from(&FloatEncoderMinMaxConfig {
    ///     min: 0.,
    ///     max: 10.,
    ///     nb_bit_precision: 8,
    ///     nb_bit_padding: 1,
    /// })?;
    /// let inside: CleartextF64 = engine.create_cleartext_from(&5.)?;
    /// let _plaintext: Plaintext32 = engine.encode_cleartext(&encoder, &inside)?;
    ///
    /// let outside: CleartextF64 = engine.create_cleartext_from(&11.)?;
    /// let refused: Result<Plaintext32, _> = engine.encode_cleartext(&encoder, &outside);
    /// assert!(refused.is_err());
    /// # Ok(())
    /// # }
    /// ```
    FloatEncoder => Plaintext32
);
implement_cleartext_encoding!(FloatEncoder => Plaintext64);
implement_cleartext_encoding!(ShiftEncoder32 => Plaintext32);
implement_cleartext_encoding!(ShiftEncoder64 => Plaintext64);
