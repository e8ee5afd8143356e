use crate::prelude::{CleartextVector32, CleartextVector64, CleartextVectorF64, DefaultEngine};
use crate::specification::engines::{
    CleartextVectorRetrievalEngine, CleartextVectorRetrievalError,
};

macro_rules! implement_cleartext_vector_retrieval {
    ($CleartextVector:ident => $Raw:ty) => {
        impl CleartextVectorRetrievalEngine<$CleartextVector, $Raw> for DefaultEngine {
            fn retrieve_cleartext_vector(
                &mut self,
                cleartext_vector: &$CleartextVector,
            ) -> Result<Vec<$Raw>, CleartextVectorRetrievalError<Self::EngineError>> {
                Ok(unsafe { self.retrieve_cleartext_vector_unchecked(cleartext_vector) })
            }

            unsafe fn retrieve_cleartext_vector_unchecked(
                &mut self,
                cleartext_vector: &$CleartextVector,
            ) -> Vec<$Raw> {
                cleartext_vector.0.cleartext_iter().map(|c| c.0).collect()
            }
        }
    };
}

implement_cleartext_vector_retrieval!(CleartextVector32 => u32);
implement_cleartext_vector_retrieval!(CleartextVector64 => u64);
implement_cleartext_vector_retrieval!(CleartextVectorF64 => f64);
