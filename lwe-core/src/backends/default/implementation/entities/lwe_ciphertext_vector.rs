use crate::commons::crypto::lwe::LweList as ImplLweList;
use crate::commons::parameters::{LweCiphertextCount, LweDimension};
use crate::specification::entities::markers::LweCiphertextVectorKind;
use crate::specification::entities::{AbstractEntity, LweCiphertextVectorEntity};

macro_rules! lwe_ciphertext_vector {
    ($(#[$doc:meta])* $Vector:ident<$Scalar:ty>) => {
        $(#[$doc])*
        ///
        /// The ciphertexts are stored contiguously, each one as its mask followed by its body.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $Vector(pub(crate) ImplLweList<Vec<$Scalar>>);
        impl AbstractEntity for $Vector {
            type Kind = LweCiphertextVectorKind;
        }
        impl LweCiphertextVectorEntity for $Vector {
            fn lwe_dimension(&self) -> LweDimension {
                self.0.lwe_size().to_lwe_dimension()
            }

            fn lwe_ciphertext_count(&self) -> LweCiphertextCount {
                self.0.count()
            }
        }
    };
}

lwe_ciphertext_vector!(
    /// A structure representing a vector of LWE ciphertexts with 32 bits of precision.
    LweCiphertextVector32<u32>
);
lwe_ciphertext_vector!(
    /// A structure representing a vector of LWE ciphertexts with 64 bits of precision.
    LweCiphertextVector64<u64>
);

entity_versions!(LweCiphertextVector32Version, LweCiphertextVector64Version);
