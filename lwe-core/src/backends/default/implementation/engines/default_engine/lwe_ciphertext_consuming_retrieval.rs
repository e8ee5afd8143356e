use crate::commons::math::tensor::IntoTensor;
use crate::prelude::{DefaultEngine, LweCiphertext32, LweCiphertext64};
use crate::specification::engines::{
    LweCiphertextConsumingRetrievalEngine, LweCiphertextConsumingRetrievalError,
};

macro_rules! implement_lwe_ciphertext_consuming_retrieval {
    ($Ciphertext:ident => $Scalar:ty) => {
        impl LweCiphertextConsumingRetrievalEngine<$Ciphertext, Vec<$Scalar>> for DefaultEngine {
            fn consume_retrieve_lwe_ciphertext(
                &mut self,
                ciphertext: $Ciphertext,
            ) -> Result<Vec<$Scalar>, LweCiphertextConsumingRetrievalError<Self::EngineError>> {
                Ok(unsafe { self.consume_retrieve_lwe_ciphertext_unchecked(ciphertext) })
            }

            unsafe fn consume_retrieve_lwe_ciphertext_unchecked(
                &mut self,
                ciphertext: $Ciphertext,
            ) -> Vec<$Scalar> {
                ciphertext.0.into_tensor().into_container()
            }
        }
    };
}

implement_lwe_ciphertext_consuming_retrieval!(LweCiphertext32 => u32);
implement_lwe_ciphertext_consuming_retrieval!(LweCiphertext64 => u64);
