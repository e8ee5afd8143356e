use crate::commons::crypto::encoding::PlaintextList as ImplPlaintextList;
use crate::prelude::{DefaultEngine, PlaintextVector32, PlaintextVector64};
use crate::specification::engines::{
    PlaintextVectorCreationEngine, PlaintextVectorCreationError,
};

macro_rules! implement_plaintext_vector_creation {
    ($Scalar:ty => $PlaintextVector:ident) => {
        impl PlaintextVectorCreationEngine<$Scalar, $PlaintextVector> for DefaultEngine {
            fn create_plaintext_vector_from(
                &mut self,
                input: &[$Scalar],
            ) -> Result<$PlaintextVector, PlaintextVectorCreationError<Self::EngineError>> {
                PlaintextVectorCreationError::perform_generic_checks(input)?;
                Ok(unsafe { self.create_plaintext_vector_from_unchecked(input) })
            }

            unsafe fn create_plaintext_vector_from_unchecked(
                &mut self,
                input: &[$Scalar],
            ) -> $PlaintextVector {
                $PlaintextVector(ImplPlaintextList::from_container(input.to_vec()))
            }
        }
    };
}

implement_plaintext_vector_creation!(u32 => PlaintextVector32);
implement_plaintext_vector_creation!(u64 => PlaintextVector64);
