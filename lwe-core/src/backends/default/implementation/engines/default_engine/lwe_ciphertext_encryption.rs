use crate::commons::crypto::lwe::LweCiphertext as ImplLweCiphertext;
use crate::commons::dispersion::Variance;
use crate::prelude::{
    DefaultEngine, LweCiphertext32, LweCiphertext64, LweSecretKey32, LweSecretKey64, Plaintext32,
    Plaintext64,
};
use crate::specification::engines::{LweCiphertextEncryptionEngine, LweCiphertextEncryptionError};
use crate::specification::entities::LweSecretKeyEntity;

macro_rules! implement_lwe_ciphertext_encryption {
    ($(#[$doc:meta])* $Scalar:ty, $SecretKey:ident, $Plaintext:ident => $Ciphertext:ident) => {
        $(#[$doc])*
        impl LweCiphertextEncryptionEngine<$SecretKey, $Plaintext, $Ciphertext> for DefaultEngine {
            fn encrypt_lwe_ciphertext(
                &mut self,
                key: &$SecretKey,
                input: &$Plaintext,
                noise: Variance,
            ) -> Result<$Ciphertext, LweCiphertextEncryptionError<Self::EngineError>> {
                LweCiphertextEncryptionError::perform_generic_checks(noise)?;
                Ok(unsafe { self.encrypt_lwe_ciphertext_unchecked(key, input, noise) })
            }

            unsafe fn encrypt_lwe_ciphertext_unchecked(
                &mut self,
                key: &$SecretKey,
                input: &$Plaintext,
                noise: Variance,
            ) -> $Ciphertext {
                let mut ciphertext = ImplLweCiphertext::allocate(
                    <$Scalar>::default(),
                    key.lwe_dimension().to_lwe_size(),
                );
                key.0.encrypt_lwe(&mut ciphertext, &input.0, noise, &mut self.encryption_generator);
                $Ciphertext(ciphertext)
            }
        }
    };
}

implement_lwe_ciphertext_encryption!(u32, LweSecretKey32, Plaintext32 => LweCiphertext32);
implement_lwe_ciphertext_encryption!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// // Toy parameters, far from secure.
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(4))?;
    /// let plaintext = engine.create_plaintext_from(&(5_u64 << 57))?;
    /// let noise = Variance(2_f64.powi(-40));
    /// let ciphertext = engine.encrypt_lwe_ciphertext(&key, &plaintext, noise)?;
    /// assert_eq!(ciphertext.lwe_dimension(), LweDimension(4));
    ///
    /// let refused = engine.encrypt_lwe_ciphertext(&key, &plaintext, Variance(-1.));
    /// assert_eq!(refused, Err(LweCiphertextEncryptionError::InvalidVariance));
    /// # Ok(())
    /// # }
    /// ```
    u64, LweSecretKey64, Plaintext64 => LweCiphertext64
);
