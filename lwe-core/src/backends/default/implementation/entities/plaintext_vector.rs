use crate::commons::crypto::encoding::PlaintextList as ImplPlaintextList;
use crate::commons::parameters::PlaintextCount;
use crate::specification::entities::markers::PlaintextVectorKind;
use crate::specification::entities::{AbstractEntity, PlaintextVectorEntity};

macro_rules! plaintext_vector {
    ($(#[$doc:meta])* $Vector:ident<$Scalar:ty>) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $Vector(pub(crate) ImplPlaintextList<Vec<$Scalar>>);
        impl AbstractEntity for $Vector {
            type Kind = PlaintextVectorKind;
        }
        impl PlaintextVectorEntity for $Vector {
            fn plaintext_count(&self) -> PlaintextCount {
                self.0.count()
            }
        }
    };
}

plaintext_vector!(
    /// A structure representing a vector of plaintexts with 32 bits of precision.
    PlaintextVector32<u32>
);
plaintext_vector!(
    /// A structure representing a vector of plaintexts with 64 bits of precision.
    PlaintextVector64<u64>
);

entity_versions!(PlaintextVector32Version, PlaintextVector64Version);
