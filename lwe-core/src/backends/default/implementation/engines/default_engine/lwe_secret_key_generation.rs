use crate::commons::crypto::secret::LweSecretKey as ImplLweSecretKey;
use crate::commons::parameters::LweDimension;
use crate::prelude::{DefaultEngine, LweSecretKey32, LweSecretKey64};
use crate::specification::engines::{LweSecretKeyGenerationEngine, LweSecretKeyGenerationError};

macro_rules! implement_lwe_secret_key_generation {
    ($(#[$doc:meta])* $SecretKey:ident) => {
        $(#[$doc])*
        impl LweSecretKeyGenerationEngine<$SecretKey> for DefaultEngine {
            fn generate_new_lwe_secret_key(
                &mut self,
                lwe_dimension: LweDimension,
            ) -> Result<$SecretKey, LweSecretKeyGenerationError<Self::EngineError>> {
                LweSecretKeyGenerationError::perform_generic_checks(lwe_dimension)?;
                Ok(unsafe { self.generate_new_lwe_secret_key_unchecked(lwe_dimension) })
            }

            #[tracing::instrument(level = "trace", skip_all, fields(dimension = lwe_dimension.0))]
            unsafe fn generate_new_lwe_secret_key_unchecked(
                &mut self,
                lwe_dimension: LweDimension,
            ) -> $SecretKey {
                $SecretKey(ImplLweSecretKey::generate_binary(
                    lwe_dimension,
                    &mut self.secret_generator,
                ))
            }
        }
    };
}

implement_lwe_secret_key_generation!(LweSecretKey32);
implement_lwe_secret_key_generation!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // A null secret mixed into the system entropy: fine for an example, not for real keys.
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(630))?;
    /// assert_eq!(key.lwe_dimension(), LweDimension(630));
    ///
    /// let no_key: Result<LweSecretKey64, _> = engine.generate_new_lwe_secret_key(LweDimension(0));
    /// assert_eq!(no_key, Err(LweSecretKeyGenerationError::NullLweDimension));
    /// # Ok(())
    /// # }
    /// ```
    LweSecretKey64
);
