#![allow(clippy::missing_safety_doc)]

use crate::commons::crypto::encoding::{
    CleartextList as ImplCleartextList, PlaintextList as ImplPlaintextList,
};
use crate::commons::crypto::lwe::{LweCiphertext as ImplLweCiphertext, LweList as ImplLweList};
use crate::commons::crypto::secret::LweSecretKey as ImplLweSecretKey;
use crate::prelude::{
    CleartextVector32, CleartextVector32Version, CleartextVector64, CleartextVector64Version,
    CleartextVectorF64, CleartextVectorF64Version, DefaultSerializationEngine,
    DefaultSerializationError, EntitySerializationEngine, EntitySerializationError, LweCiphertext32,
    LweCiphertext32Version, LweCiphertext64, LweCiphertext64Version, LweCiphertextVector32,
    LweCiphertextVector32Version, LweCiphertextVector64, LweCiphertextVector64Version,
    LweSecretKey32, LweSecretKey32Version, LweSecretKey64, LweSecretKey64Version, PlaintextVector32,
    PlaintextVector32Version, PlaintextVector64, PlaintextVector64Version,
};
use serde::Serialize;

macro_rules! implement_entity_serialization {
    ($Entity:ident, $Version:ident, $Inner:ty) => {
        impl EntitySerializationEngine<$Entity, Vec<u8>> for DefaultSerializationEngine {
            fn serialize(
                &mut self,
                entity: &$Entity,
            ) -> Result<Vec<u8>, EntitySerializationError<Self::EngineError>> {
                #[derive(Serialize)]
                struct Serializable<'a> {
                    version: $Version,
                    inner: &'a $Inner,
                }
                let serializable = Serializable {
                    version: $Version::V0,
                    inner: &entity.0,
                };
                bincode::serialize(&serializable)
                    .map_err(DefaultSerializationError::Serialization)
                    .map_err(EntitySerializationError::Engine)
            }

            unsafe fn serialize_unchecked(&mut self, entity: &$Entity) -> Vec<u8> {
                self.serialize(entity).unwrap()
            }
        }
    };
}

implement_entity_serialization!(
    LweSecretKey32,
    LweSecretKey32Version,
    ImplLweSecretKey<Vec<u32>>
);
implement_entity_serialization!(
    LweSecretKey64,
    LweSecretKey64Version,
    ImplLweSecretKey<Vec<u64>>
);
implement_entity_serialization!(
    LweCiphertext32,
    LweCiphertext32Version,
    ImplLweCiphertext<Vec<u32>>
);
implement_entity_serialization!(
    LweCiphertext64,
    LweCiphertext64Version,
    ImplLweCiphertext<Vec<u64>>
);
implement_entity_serialization!(
    LweCiphertextVector32,
    LweCiphertextVector32Version,
    ImplLweList<Vec<u32>>
);
implement_entity_serialization!(
    LweCiphertextVector64,
    LweCiphertextVector64Version,
    ImplLweList<Vec<u64>>
);
implement_entity_serialization!(
    PlaintextVector32,
    PlaintextVector32Version,
    ImplPlaintextList<Vec<u32>>
);
implement_entity_serialization!(
    PlaintextVector64,
    PlaintextVector64Version,
    ImplPlaintextList<Vec<u64>>
);
implement_entity_serialization!(
    CleartextVector32,
    CleartextVector32Version,
    ImplCleartextList<Vec<u32>>
);
implement_entity_serialization!(
    CleartextVector64,
    CleartextVector64Version,
    ImplCleartextList<Vec<u64>>
);
implement_entity_serialization!(
    CleartextVectorF64,
    CleartextVectorF64Version,
    ImplCleartextList<Vec<f64>>
);
