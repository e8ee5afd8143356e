use crate::prelude::{DefaultEngine, PlaintextVector32, PlaintextVector64};
use crate::specification::engines::{
    PlaintextVectorRetrievalEngine, PlaintextVectorRetrievalError,
};

macro_rules! implement_plaintext_vector_retrieval {
    ($PlaintextVector:ident => $Scalar:ty) => {
        impl PlaintextVectorRetrievalEngine<$PlaintextVector, $Scalar> for DefaultEngine {
            fn retrieve_plaintext_vector(
                &mut self,
                plaintext_vector: &$PlaintextVector,
            ) -> Result<Vec<$Scalar>, PlaintextVectorRetrievalError<Self::EngineError>> {
                Ok(unsafe { self.retrieve_plaintext_vector_unchecked(plaintext_vector) })
            }

            unsafe fn retrieve_plaintext_vector_unchecked(
                &mut self,
                plaintext_vector: &$PlaintextVector,
            ) -> Vec<$Scalar> {
                plaintext_vector.0.plaintext_iter().map(|p| p.0).collect()
            }
        }
    };
}

implement_plaintext_vector_retrieval!(PlaintextVector32 => u32);
implement_plaintext_vector_retrieval!(PlaintextVector64 => u64);

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn empty_plaintext_vectors_are_rejected() {
        let mut engine = DefaultEngine::new(Box::new(UnixSeeder::new(0))).unwrap();
        let nothing: Vec<u64> = Vec::new();
        let empty: Result<PlaintextVector64, _> = engine.create_plaintext_vector_from(&nothing);
        assert_eq!(empty.unwrap_err(), PlaintextVectorCreationError::EmptyInput);

        let values = vec![7_u32, 1, 3];
        let vector: PlaintextVector32 = engine.create_plaintext_vector_from(&values).unwrap();
        assert_eq!(engine.retrieve_plaintext_vector(&vector).unwrap(), vec![7, 1, 3]);
    }
}
