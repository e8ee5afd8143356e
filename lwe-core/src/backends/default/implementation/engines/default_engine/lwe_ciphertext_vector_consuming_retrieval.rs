use crate::commons::math::tensor::IntoTensor;
use crate::prelude::{DefaultEngine, LweCiphertextVector32, LweCiphertextVector64};
use crate::specification::engines::{
    LweCiphertextVectorConsumingRetrievalEngine, LweCiphertextVectorConsumingRetrievalError,
};

macro_rules! implement_lwe_ciphertext_vector_consuming_retrieval {
    ($CiphertextVector:ident => $Scalar:ty) => {
        impl LweCiphertextVectorConsumingRetrievalEngine<$CiphertextVector, Vec<$Scalar>>
            for DefaultEngine
        {
            fn consume_retrieve_lwe_ciphertext_vector(
                &mut self,
                ciphertext: $CiphertextVector,
            ) -> Result<
                Vec<$Scalar>,
                LweCiphertextVectorConsumingRetrievalError<Self::EngineError>,
            > {
                Ok(unsafe { self.consume_retrieve_lwe_ciphertext_vector_unchecked(ciphertext) })
            }

            unsafe fn consume_retrieve_lwe_ciphertext_vector_unchecked(
                &mut self,
                ciphertext: $CiphertextVector,
            ) -> Vec<$Scalar> {
                ciphertext.0.into_tensor().into_container()
            }
        }
    };
}

implement_lwe_ciphertext_vector_consuming_retrieval!(LweCiphertextVector32 => u32);
implement_lwe_ciphertext_vector_consuming_retrieval!(LweCiphertextVector64 => u64);
