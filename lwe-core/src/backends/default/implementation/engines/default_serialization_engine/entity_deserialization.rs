#![allow(clippy::missing_safety_doc)]

use crate::commons::crypto::encoding::{
    CleartextList as ImplCleartextList, PlaintextList as ImplPlaintextList,
};
use crate::commons::crypto::lwe::{LweCiphertext as ImplLweCiphertext, LweList as ImplLweList};
use crate::commons::crypto::secret::LweSecretKey as ImplLweSecretKey;
use crate::commons::math::tensor::AsRefTensor;
use crate::prelude::{
    CleartextVector32, CleartextVector32Version, CleartextVector64, CleartextVector64Version,
    CleartextVectorCreationError, CleartextVectorF64, CleartextVectorF64Version,
    DefaultSerializationEngine, DefaultSerializationError, EntityDeserializationEngine,
    EntityDeserializationError, LweCiphertext32, LweCiphertext32Version, LweCiphertext64,
    LweCiphertext64Version, LweCiphertextCreationError, LweCiphertextVector32,
    LweCiphertextVector32Version, LweCiphertextVector64, LweCiphertextVector64Version,
    LweCiphertextVectorCreationError, LweSecretKey32, LweSecretKey32Version, LweSecretKey64,
    LweSecretKey64Version, LweSecretKeyGenerationError, PlaintextVector32,
    PlaintextVector32Version, PlaintextVector64, PlaintextVector64Version,
    PlaintextVectorCreationError,
};
use serde::Deserialize;

/// Structural checks run on a decoded payload before it is wrapped into an entity.
///
/// A payload can be well formed for `bincode` and still describe an entity the creation engines
/// would have refused, e.g. a vector whose LWE size is zero.
trait DecodedInner {
    fn is_well_formed(&self) -> bool;
}

impl<Scalar> DecodedInner for ImplLweSecretKey<Vec<Scalar>> {
    fn is_well_formed(&self) -> bool {
        LweSecretKeyGenerationError::<DefaultSerializationError>::perform_generic_checks(
            self.key_size(),
        )
        .is_ok()
    }
}

impl<Scalar> DecodedInner for ImplLweCiphertext<Vec<Scalar>> {
    fn is_well_formed(&self) -> bool {
        LweCiphertextCreationError::<DefaultSerializationError>::perform_generic_checks(
            self.as_tensor().len(),
        )
        .is_ok()
    }
}

impl<Scalar> DecodedInner for ImplLweList<Vec<Scalar>> {
    fn is_well_formed(&self) -> bool {
        LweCiphertextVectorCreationError::<DefaultSerializationError>::perform_generic_checks(
            self.as_tensor().len(),
            self.lwe_size(),
        )
        .is_ok()
    }
}

impl<Scalar> DecodedInner for ImplPlaintextList<Vec<Scalar>> {
    fn is_well_formed(&self) -> bool {
        PlaintextVectorCreationError::<DefaultSerializationError>::perform_generic_checks(
            self.as_tensor().as_slice(),
        )
        .is_ok()
    }
}

impl<Scalar> DecodedInner for ImplCleartextList<Vec<Scalar>> {
    fn is_well_formed(&self) -> bool {
        CleartextVectorCreationError::<DefaultSerializationError>::perform_generic_checks(
            self.as_tensor().as_slice(),
        )
        .is_ok()
    }
}

macro_rules! implement_entity_deserialization {
    ($Entity:ident, $Version:ident, $Inner:ty) => {
        impl EntityDeserializationEngine<&[u8], $Entity> for DefaultSerializationEngine {
            fn deserialize(
                &mut self,
                serialized: &[u8],
            ) -> Result<$Entity, EntityDeserializationError<Self::EngineError>> {
                #[derive(Deserialize)]
                struct Deserializable {
                    version: $Version,
                    inner: $Inner,
                }
                let deserialized: Deserializable = bincode::deserialize(serialized)
                    .map_err(DefaultSerializationError::Deserialization)
                    .map_err(EntityDeserializationError::Engine)?;
                match deserialized {
                    Deserializable {
                        version: $Version::Unsupported,
                        ..
                    } => Err(EntityDeserializationError::Engine(
                        DefaultSerializationError::UnsupportedVersion,
                    )),
                    Deserializable {
                        version: $Version::V0,
                        inner,
                    } if !inner.is_well_formed() => Err(EntityDeserializationError::Engine(
                        DefaultSerializationError::InvalidEntity,
                    )),
                    Deserializable {
                        version: $Version::V0,
                        inner,
                    } => Ok($Entity(inner)),
                }
            }

            unsafe fn deserialize_unchecked(&mut self, serialized: &[u8]) -> $Entity {
                self.deserialize(serialized).unwrap()
            }
        }
    };
}

implement_entity_deserialization!(
    LweSecretKey32,
    LweSecretKey32Version,
    ImplLweSecretKey<Vec<u32>>
);
implement_entity_deserialization!(
    LweSecretKey64,
    LweSecretKey64Version,
    ImplLweSecretKey<Vec<u64>>
);
implement_entity_deserialization!(
    LweCiphertext32,
    LweCiphertext32Version,
    ImplLweCiphertext<Vec<u32>>
);
implement_entity_deserialization!(
    LweCiphertext64,
    LweCiphertext64Version,
    ImplLweCiphertext<Vec<u64>>
);
implement_entity_deserialization!(
    LweCiphertextVector32,
    LweCiphertextVector32Version,
    ImplLweList<Vec<u32>>
);
implement_entity_deserialization!(
    LweCiphertextVector64,
    LweCiphertextVector64Version,
    ImplLweList<Vec<u64>>
);
implement_entity_deserialization!(
    PlaintextVector32,
    PlaintextVector32Version,
    ImplPlaintextList<Vec<u32>>
);
implement_entity_deserialization!(
    PlaintextVector64,
    PlaintextVector64Version,
    ImplPlaintextList<Vec<u64>>
);
implement_entity_deserialization!(
    CleartextVector32,
    CleartextVector32Version,
    ImplCleartextList<Vec<u32>>
);
implement_entity_deserialization!(
    CleartextVector64,
    CleartextVector64Version,
    ImplCleartextList<Vec<u64>>
);
implement_entity_deserialization!(
    CleartextVectorF64,
    CleartextVectorF64Version,
    ImplCleartextList<Vec<f64>>
);
