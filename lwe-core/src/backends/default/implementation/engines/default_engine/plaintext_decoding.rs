use crate::commons::crypto::encoding::Encoder;
use crate::prelude::{
    CleartextF64, DefaultEngine, FloatEncoder, Plaintext32, Plaintext64, ShiftEncoder32,
    ShiftEncoder64,
};
use crate::specification::engines::{PlaintextDecodingEngine, PlaintextDecodingError};

macro_rules! implement_plaintext_decoding {
    ($(#[$doc:meta])* $Encoder:ident, $Plaintext:ident) => {
        $(#[$doc])*
        impl PlaintextDecodingEngine<$Encoder, $Plaintext, CleartextF64> for DefaultEngine {
            fn decode_plaintext(
                &mut self,
                encoder: &$Encoder,
                input: &$Plaintext,
            ) -> Result<CleartextF64, PlaintextDecodingError<Self::EngineError>> {
                Ok(unsafe { self.decode_plaintext_unchecked(encoder, input) })
            }

            unsafe fn decode_plaintext_unchecked(
                &mut self,
                encoder: &$Encoder,
                input: &$Plaintext,
            ) -> CleartextF64 {
                CleartextF64(encoder.0.decode(input.0))
            }
        }
    };
}

implement_plaintext_decoding!(FloatEncoder, Plaintext32);
implement_plaintext_decoding!(FloatEncoder, Plaintext64);
implement_plaintext_decoding!(ShiftEncoder32, Plaintext32);
implement_plaintext_decoding!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let encoder: ShiftEncoder64 =
    ///     engine.create_encoder_from(&ShiftEncoderConfig { precision_bits: 6 })?;
    /// // 5 in the top bits, plus a small perturbation below the rounding threshold.
    /// let plaintext = engine.create_plaintext_from(&((5_u64 << 57) + (1 << 40)))?;
    /// let cleartext = engine.decode_plaintext(&encoder, &plaintext)?;
    /// assert_eq!(engine.retrieve_cleartext(&cleartext)?, 5.);
    /// # Ok(())
    /// # }
    /// ```
    ShiftEncoder64,
    Plaintext64
);
