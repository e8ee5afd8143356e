use crate::commons::crypto::lwe::LweList as ImplLweList;
use crate::commons::dispersion::Variance;
use crate::commons::parameters::LweCiphertextCount;
use crate::prelude::{
    DefaultEngine, LweCiphertextVector32, LweCiphertextVector64, LweSecretKey32, LweSecretKey64,
    PlaintextVector32, PlaintextVector64,
};
use crate::specification::engines::{
    LweCiphertextVectorEncryptionEngine, LweCiphertextVectorEncryptionError,
};
use crate::specification::entities::{LweSecretKeyEntity, PlaintextVectorEntity};

macro_rules! implement_lwe_ciphertext_vector_encryption {
    ($(#[$doc:meta])* $Scalar:ty, $SecretKey:ident, $PlaintextVector:ident => $Output:ident) => {
        $(#[$doc])*
        impl LweCiphertextVectorEncryptionEngine<$SecretKey, $PlaintextVector, $Output>
            for DefaultEngine
        {
            fn encrypt_lwe_ciphertext_vector(
                &mut self,
                key: &$SecretKey,
                input: &$PlaintextVector,
                noise: Variance,
            ) -> Result<$Output, LweCiphertextVectorEncryptionError<Self::EngineError>> {
                LweCiphertextVectorEncryptionError::perform_generic_checks(noise)?;
                Ok(unsafe { self.encrypt_lwe_ciphertext_vector_unchecked(key, input, noise) })
            }

            #[tracing::instrument(
                level = "trace",
                skip_all,
                fields(dimension = key.lwe_dimension().0, count = input.plaintext_count().0)
            )]
            unsafe fn encrypt_lwe_ciphertext_vector_unchecked(
                &mut self,
                key: &$SecretKey,
                input: &$PlaintextVector,
                noise: Variance,
            ) -> $Output {
                let mut ciphertexts = ImplLweList::allocate(
                    <$Scalar>::default(),
                    key.lwe_dimension().to_lwe_size(),
                    LweCiphertextCount(input.plaintext_count().0),
                );
                key.0.encrypt_lwe_list(
                    &mut ciphertexts,
                    &input.0,
                    noise,
                    &mut self.encryption_generator,
                );
                $Output(ciphertexts)
            }
        }
    };
}

implement_lwe_ciphertext_vector_encryption!(
    u32, LweSecretKey32, PlaintextVector32 => LweCiphertextVector32
);
implement_lwe_ciphertext_vector_encryption!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let key: LweSecretKey64 = engine.generate_new_lwe_secret_key(LweDimension(8))?;
    /// let words = vec![1_u64 << 60, 2 << 60, 3 << 60];
    /// let plaintexts = engine.create_plaintext_vector_from(&words)?;
    /// let ciphertexts =
    ///     engine.encrypt_lwe_ciphertext_vector(&key, &plaintexts, Variance(2_f64.powi(-50)))?;
    /// assert_eq!(ciphertexts.lwe_ciphertext_count(), LweCiphertextCount(3));
    /// assert_eq!(ciphertexts.lwe_dimension(), LweDimension(8));
    /// # Ok(())
    /// # }
    /// ```
    u64, LweSecretKey64, PlaintextVector64 => LweCiphertextVector64
);
