use crate::commons::crypto::encoding::ShiftEncoder as ImplShiftEncoder;
use crate::prelude::{
    DefaultEngine, DefaultError, FloatEncoder, FloatEncoderCenterRadiusConfig,
    FloatEncoderMinMaxConfig, ShiftEncoder32, ShiftEncoder64, ShiftEncoderConfig,
};
use crate::specification::engines::{EncoderCreationEngine, EncoderCreationError};

impl FloatEncoderMinMaxConfig {
    fn check(&self) -> Result<(), DefaultError> {
        if self.min >= self.max {
            Err(DefaultError::FloatEncoderMinMaxOrder)
        } else if self.nb_bit_precision == 0 {
            Err(DefaultError::FloatEncoderNullPrecision)
        } else {
            Ok(())
        }
    }
}

impl FloatEncoderCenterRadiusConfig {
    fn check(&self) -> Result<(), DefaultError> {
        if self.radius <= 0. {
            Err(DefaultError::FloatEncoderNullRadius)
        } else if self.nb_bit_precision == 0 {
            Err(DefaultError::FloatEncoderNullPrecision)
        } else {
            Ok(())
        }
    }
}

macro_rules! implement_float_encoder_creation {
    ($(#[$doc:meta])* $Config:ident) => {
        $(#[$doc])*
        impl EncoderCreationEngine<$Config, FloatEncoder> for DefaultEngine {
            fn create_encoder_from(
                &mut self,
                config: &$Config,
            ) -> Result<FloatEncoder, EncoderCreationError<Self::EngineError>> {
                config.check().map_err(EncoderCreationError::Engine)?;
                Ok(unsafe { self.create_encoder_from_unchecked(config) })
            }

            unsafe fn create_encoder_from_unchecked(&mut self, config: &$Config) -> FloatEncoder {
                FloatEncoder(config.to_commons())
            }
        }
    };
}

macro_rules! implement_shift_encoder_creation {
    ($(#[$doc:meta])* $Encoder:ident) => {
        $(#[$doc])*
        impl EncoderCreationEngine<ShiftEncoderConfig, $Encoder> for DefaultEngine {
            fn create_encoder_from(
                &mut self,
                config: &ShiftEncoderConfig,
            ) -> Result<$Encoder, EncoderCreationError<Self::EngineError>> {
                ImplShiftEncoder::new(config.precision())
                    .map($Encoder)
                    .ok_or(EncoderCreationError::Engine(
                        DefaultError::ShiftEncoderPrecisionTooLarge,
                    ))
            }

            unsafe fn create_encoder_from_unchecked(
                &mut self,
                config: &ShiftEncoderConfig,
            ) -> $Encoder {
                $Encoder(ImplShiftEncoder::new_unchecked(config.precision()))
            }
        }
    };
}

implement_float_encoder_creation!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let config = FloatEncoderMinMaxConfig {
    ///     min: 0.,
    ///     max: 10.,
    ///     nb_bit_precision: 8,
    ///     nb_bit_padding: 1,
    /// };
    /// let _encoder = engine.create_encoder_from(&config)?;
    ///
    /// let reversed = FloatEncoderMinMaxConfig { min: 10., max: 0., ..config };
    /// assert_eq!(
    ///     engine.create_encoder_from(&reversed),
    ///     Err(EncoderCreationError::Engine(DefaultError::FloatEncoderMinMaxOrder))
    /// );
    /// # Ok(())
    /// # }
    /// ```
    FloatEncoderMinMaxConfig
);
implement_float_encoder_creation!(FloatEncoderCenterRadiusConfig);
implement_shift_encoder_creation!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let _encoder: ShiftEncoder32 =
    ///     engine.create_encoder_from(&ShiftEncoderConfig { precision_bits: 6 })?;
    ///
    /// // A 32 bits word can not hold 32 bits of precision plus a sign bit.
    /// let result: Result<ShiftEncoder32, _> =
    ///     engine.create_encoder_from(&ShiftEncoderConfig { precision_bits: 32 });
    /// assert!(result.is_err());
    /// # Ok(())
    /// # }
    /// ```
    ShiftEncoder32
);
implement_shift_encoder_creation!(ShiftEncoder64);
