use crate::commons::crypto::encoding::Plaintext as ImplPlaintext;
use crate::prelude::{
    DefaultEngine, LweCiphertext32, LweCiphertext64, LweSecretKey32, LweSecretKey64, Plaintext32,
    Plaintext64,
};
use crate::specification::engines::{LweCiphertextDecryptionEngine, LweCiphertextDecryptionError};

macro_rules! implement_lwe_ciphertext_decryption {
    ($(#[$doc:meta])* $Scalar:ty, $SecretKey:ident, $Ciphertext:ident => $Plaintext:ident) => {
        $(#[$doc])*
        impl LweCiphertextDecryptionEngine<$SecretKey, $Ciphertext, $Plaintext> for DefaultEngine {
            fn decrypt_lwe_ciphertext(
                &mut self,
                key: &$SecretKey,
                input: &$Ciphertext,
            ) -> Result<$Plaintext, LweCiphertextDecryptionError<Self::EngineError>> {
                LweCiphertextDecryptionError::perform_generic_checks(key, input)?;
                Ok(unsafe { self.decrypt_lwe_ciphertext_unchecked(key, input) })
            }

            unsafe fn decrypt_lwe_ciphertext_unchecked(
                &mut self,
                key: &$SecretKey,
                input: &$Ciphertext,
            ) -> $Plaintext {
                let mut plaintext = ImplPlaintext(<$Scalar>::default());
                key.0.decrypt_lwe(&mut plaintext, &input.0);
                $Plaintext(plaintext)
            }
        }
    };
}

implement_lwe_ciphertext_decryption!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let key: LweSecretKey32 = engine.generate_new_lwe_secret_key(LweDimension(16))?;
    /// let plaintext = engine.create_plaintext_from(&(3_u32 << 27))?;
    /// let noise = Variance(2_f64.powi(-30));
    /// let ciphertext = engine.encrypt_lwe_ciphertext(&key, &plaintext, noise)?;
    /// let decrypted = engine.decrypt_lwe_ciphertext(&key, &ciphertext)?;
    ///
    /// // The decrypted word still carries the noise in its low bits.
    /// let word = engine.retrieve_plaintext(&decrypted)?;
    /// assert_eq!(word.wrapping_add(1 << 26) >> 27, 3);
    /// # Ok(())
    /// # }
    /// ```
    u32, LweSecretKey32, LweCiphertext32 => Plaintext32
);
implement_lwe_ciphertext_decryption!(u64, LweSecretKey64, LweCiphertext64 => Plaintext64);
