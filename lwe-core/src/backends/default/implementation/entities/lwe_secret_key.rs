use crate::commons::crypto::secret::LweSecretKey as ImplLweSecretKey;
use crate::commons::parameters::LweDimension;
use crate::specification::entities::markers::LweSecretKeyKind;
use crate::specification::entities::{AbstractEntity, LweSecretKeyEntity};

macro_rules! lwe_secret_key {
    ($(#[$doc:meta])* $Key:ident<$Scalar:ty>) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $Key(pub(crate) ImplLweSecretKey<Vec<$Scalar>>);
        impl AbstractEntity for $Key {
            type Kind = LweSecretKeyKind;
        }
        impl LweSecretKeyEntity for $Key {
            fn lwe_dimension(&self) -> LweDimension {
                self.0.key_size()
            }
        }
    };
}

lwe_secret_key!(
    /// A structure representing an LWE secret key with 32 bits of precision.
    LweSecretKey32<u32>
);
lwe_secret_key!(
    /// A structure representing an LWE secret key with 64 bits of precision.
    LweSecretKey64<u64>
);

entity_versions!(LweSecretKey32Version, LweSecretKey64Version);
