use crate::commons::crypto::encoding::CleartextList as ImplCleartextList;
use crate::commons::parameters::CleartextCount;
use crate::specification::entities::markers::CleartextVectorKind;
use crate::specification::entities::{AbstractEntity, CleartextVectorEntity};

macro_rules! cleartext_vector {
    ($(#[$doc:meta])* $Vector:ident<$Scalar:ty>) => {
        $(#[$doc])*
        pub struct $Vector(pub(crate) ImplCleartextList<Vec<$Scalar>>);
        impl AbstractEntity for $Vector {
            type Kind = CleartextVectorKind;
        }
        impl CleartextVectorEntity for $Vector {
            fn cleartext_count(&self) -> CleartextCount {
                self.0.count()
            }
        }
    };
}

cleartext_vector!(
    /// A structure representing a vector of cleartexts with 32 bits of precision.
    #[derive(Debug, Clone, PartialEq, Eq)]
    CleartextVector32<u32>
);
cleartext_vector!(
    /// A structure representing a vector of cleartexts with 64 bits of precision.
    #[derive(Debug, Clone, PartialEq, Eq)]
    CleartextVector64<u64>
);
cleartext_vector!(
    /// A structure representing a vector of cleartexts wrapping 64 bits floating point numbers.
    #[derive(Debug, Clone, PartialEq)]
    CleartextVectorF64<f64>
);

entity_versions!(
    CleartextVector32Version,
    CleartextVector64Version,
    CleartextVectorF64Version
);
