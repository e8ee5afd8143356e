use crate::commons::crypto::encoding::PlaintextList as ImplPlaintextList;
use crate::commons::parameters::PlaintextCount;
use crate::prelude::{
    DefaultParallelEngine, LweCiphertextVector32, LweCiphertextVector64, LweSecretKey32,
    LweSecretKey64, PlaintextVector32, PlaintextVector64,
};
use crate::specification::engines::{
    LweCiphertextVectorDecryptionEngine, LweCiphertextVectorDecryptionError,
};
use crate::specification::entities::{LweCiphertextVectorEntity, LweSecretKeyEntity};

macro_rules! implement_parallel_lwe_ciphertext_vector_decryption {
    ($Scalar:ty, $SecretKey:ident, $CiphertextVector:ident => $Output:ident) => {
        impl LweCiphertextVectorDecryptionEngine<$SecretKey, $CiphertextVector, $Output>
            for DefaultParallelEngine
        {
            fn decrypt_lwe_ciphertext_vector(
                &mut self,
                key: &$SecretKey,
                input: &$CiphertextVector,
            ) -> Result<$Output, LweCiphertextVectorDecryptionError<Self::EngineError>> {
                LweCiphertextVectorDecryptionError::perform_generic_checks(key, input)?;
                Ok(unsafe { self.decrypt_lwe_ciphertext_vector_unchecked(key, input) })
            }

            #[tracing::instrument(
                level = "trace",
                skip_all,
                fields(dimension = key.lwe_dimension().0, count = input.lwe_ciphertext_count().0)
            )]
            unsafe fn decrypt_lwe_ciphertext_vector_unchecked(
                &mut self,
                key: &$SecretKey,
                input: &$CiphertextVector,
            ) -> $Output {
                let mut plaintexts = ImplPlaintextList::allocate(
                    <$Scalar>::default(),
                    PlaintextCount(input.lwe_ciphertext_count().0),
                );
                key.0.par_decrypt_lwe_list(&mut plaintexts, &input.0);
                $Output(plaintexts)
            }
        }
    };
}

implement_parallel_lwe_ciphertext_vector_decryption!(
    u32, LweSecretKey32, LweCiphertextVector32 => PlaintextVector32
);
implement_parallel_lwe_ciphertext_vector_decryption!(
    u64, LweSecretKey64, LweCiphertextVector64 => PlaintextVector64
);
