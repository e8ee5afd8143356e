use crate::commons::crypto::lwe::LweCiphertext as ImplLweCiphertext;
use crate::commons::parameters::LweDimension;
use crate::specification::entities::markers::LweCiphertextKind;
use crate::specification::entities::{AbstractEntity, LweCiphertextEntity};

macro_rules! lwe_ciphertext {
    ($(#[$doc:meta])* $Ciphertext:ident<$Scalar:ty>) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $Ciphertext(pub(crate) ImplLweCiphertext<Vec<$Scalar>>);
        impl AbstractEntity for $Ciphertext {
            type Kind = LweCiphertextKind;
        }
        impl LweCiphertextEntity for $Ciphertext {
            fn lwe_dimension(&self) -> LweDimension {
                self.0.lwe_size().to_lwe_dimension()
            }
        }
    };
}

lwe_ciphertext!(
    /// A structure representing an LWE ciphertext with 32 bits of precision.
    LweCiphertext32<u32>
);
lwe_ciphertext!(
    /// A structure representing an LWE ciphertext with 64 bits of precision.
    LweCiphertext64<u64>
);

entity_versions!(LweCiphertext32Version, LweCiphertext64Version);
