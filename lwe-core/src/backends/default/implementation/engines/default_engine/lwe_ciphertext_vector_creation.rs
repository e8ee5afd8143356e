use crate::commons::crypto::lwe::LweList as ImplLweList;
use crate::commons::parameters::LweSize;
use crate::prelude::{DefaultEngine, LweCiphertextVector32, LweCiphertextVector64};
use crate::specification::engines::{
    LweCiphertextVectorCreationEngine, LweCiphertextVectorCreationError,
};

macro_rules! implement_lwe_ciphertext_vector_creation {
    ($Scalar:ty => $CiphertextVector:ident) => {
        impl LweCiphertextVectorCreationEngine<Vec<$Scalar>, $CiphertextVector> for DefaultEngine {
            fn create_lwe_ciphertext_vector_from(
                &mut self,
                container: Vec<$Scalar>,
                lwe_size: LweSize,
            ) -> Result<$CiphertextVector, LweCiphertextVectorCreationError<Self::EngineError>>
            {
                LweCiphertextVectorCreationError::<Self::EngineError>::perform_generic_checks(
                    container.len(),
                    lwe_size,
                )?;
                Ok(unsafe { self.create_lwe_ciphertext_vector_from_unchecked(container, lwe_size) })
            }

            unsafe fn create_lwe_ciphertext_vector_from_unchecked(
                &mut self,
                container: Vec<$Scalar>,
                lwe_size: LweSize,
            ) -> $CiphertextVector {
                $CiphertextVector(ImplLweList::from_container(container, lwe_size))
            }
        }
    };
}

implement_lwe_ciphertext_vector_creation!(u32 => LweCiphertextVector32);
implement_lwe_ciphertext_vector_creation!(u64 => LweCiphertextVector64);

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn ragged_containers_are_rejected() {
        let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
        let ragged: Result<LweCiphertextVector64, _> =
            engine.create_lwe_ciphertext_vector_from(vec![0_u64; 7], LweSize(3));
        assert_eq!(
            ragged.unwrap_err(),
            LweCiphertextVectorCreationError::InvalidContainerSize
        );
        let bodies_only: Result<LweCiphertextVector32, _> =
            engine.create_lwe_ciphertext_vector_from(vec![0_u32; 4], LweSize(1));
        assert_eq!(
            bodies_only.unwrap_err(),
            LweCiphertextVectorCreationError::NullLweDimension
        );
        let vector: LweCiphertextVector32 = engine
            .create_lwe_ciphertext_vector_from(vec![0_u32; 6], LweSize(3))
            .unwrap();
        assert_eq!(vector.lwe_ciphertext_count(), LweCiphertextCount(2));
        assert_eq!(vector.lwe_dimension(), LweDimension(2));
    }
}
