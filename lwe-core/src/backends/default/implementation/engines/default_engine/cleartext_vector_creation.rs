use crate::commons::crypto::encoding::CleartextList as ImplCleartextList;
use crate::prelude::{CleartextVector32, CleartextVector64, CleartextVectorF64, DefaultEngine};
use crate::specification::engines::{
    CleartextVectorCreationEngine, CleartextVectorCreationError,
};

macro_rules! implement_cleartext_vector_creation {
    ($Raw:ty => $CleartextVector:ident) => {
        impl CleartextVectorCreationEngine<$Raw, $CleartextVector> for DefaultEngine {
            fn create_cleartext_vector_from(
                &mut self,
                input: &[$Raw],
            ) -> Result<$CleartextVector, CleartextVectorCreationError<Self::EngineError>> {
                CleartextVectorCreationError::perform_generic_checks(input)?;
                Ok(unsafe { self.create_cleartext_vector_from_unchecked(input) })
            }

            unsafe fn create_cleartext_vector_from_unchecked(
                &mut self,
                input: &[$Raw],
            ) -> $CleartextVector {
                $CleartextVector(ImplCleartextList::from_container(input.to_vec()))
            }
        }
    };
}

implement_cleartext_vector_creation!(u32 => CleartextVector32);
implement_cleartext_vector_creation!(u64 => CleartextVector64);
implement_cleartext_vector_creation!(f64 => CleartextVectorF64);
