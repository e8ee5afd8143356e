use crate::commons::dispersion::Variance;
use crate::prelude::{
    DefaultParallelEngine, DefaultParallelError, LweCiphertextVector32, LweCiphertextVector64,
    LweSecretKey32, LweSecretKey64, PlaintextVector32, PlaintextVector64,
};
use crate::specification::engines::{
    LweCiphertextVectorEncryptionEngine, LweCiphertextVectorEncryptionError,
};
use crate::specification::entities::{LweSecretKeyEntity, PlaintextVectorEntity};

macro_rules! implement_parallel_lwe_ciphertext_vector_encryption {
    ($(#[$doc:meta])* $SecretKey:ident, $PlaintextVector:ident => $Output:ident) => {
        $(#[$doc])*
        impl LweCiphertextVectorEncryptionEngine<$SecretKey, $PlaintextVector, $Output>
            for DefaultParallelEngine
        {
            #[tracing::instrument(
                level = "trace",
                skip_all,
                fields(dimension = key.lwe_dimension().0, count = input.plaintext_count().0)
            )]
            fn encrypt_lwe_ciphertext_vector(
                &mut self,
                key: &$SecretKey,
                input: &$PlaintextVector,
                noise: Variance,
            ) -> Result<$Output, LweCiphertextVectorEncryptionError<Self::EngineError>> {
                LweCiphertextVectorEncryptionError::perform_generic_checks(noise)?;
                let ciphertexts = self
                    .par_encrypt_lwe_list(&key.0, &input.0, noise)
                    .map_err(DefaultParallelError::GeneratorFork)
                    .map_err(LweCiphertextVectorEncryptionError::Engine)?;
                Ok($Output(ciphertexts))
            }

            unsafe fn encrypt_lwe_ciphertext_vector_unchecked(
                &mut self,
                key: &$SecretKey,
                input: &$PlaintextVector,
                noise: Variance,
            ) -> $Output {
                $Output(self.par_encrypt_lwe_list(&key.0, &input.0, noise).unwrap())
            }
        }
    };
}

implement_parallel_lwe_ciphertext_vector_encryption!(
    /// # Example:
    /// ```
    /// use lwe_core::prelude::*;
    /// # use std::error::Error;
    ///
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let mut parallel_engine = DefaultParallelEngine::new(Box::new(UnixSeeder::new(0)))?;
    /// let key: LweSecretKey32 = engine.generate_new_lwe_secret_key(LweDimension(6))?;
    /// let plaintexts: PlaintextVector32 = engine.create_plaintext_vector_from(&[3 << 28; 5])?;
    ///
    /// let ciphertexts = parallel_engine.encrypt_lwe_ciphertext_vector(
    ///     &key,
    ///     &plaintexts,
    ///     Variance(2_f64.powi(-25)),
    /// )?;
    /// let decrypted = parallel_engine.decrypt_lwe_ciphertext_vector(&key, &ciphertexts)?;
    /// assert_eq!(decrypted.plaintext_count(), PlaintextCount(5));
    /// # Ok(())
    /// # }
    /// ```
    LweSecretKey32, PlaintextVector32 => LweCiphertextVector32
);
implement_parallel_lwe_ciphertext_vector_encryption!(
    LweSecretKey64, PlaintextVector64 => LweCiphertextVector64
);
