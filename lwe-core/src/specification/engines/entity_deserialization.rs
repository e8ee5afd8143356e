use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::AbstractEntity;

engine_error! {
    EntityDeserializationError for EntityDeserializationEngine @
}

/// A trait for engines deserializing entities.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation deserializes a `Serialized` value into an
/// entity.
pub trait EntityDeserializationEngine<Serialized, Entity>: AbstractEngine
where
    Entity: AbstractEntity,
{
    /// Deserializes an entity.
    fn deserialize(
        &mut self,
        serialized: Serialized,
    ) -> Result<Entity, EntityDeserializationError<Self::EngineError>>;

    /// Unchecked version of [`Self::deserialize`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`EntityDeserializationError`] variants.
    unsafe fn deserialize_unchecked(&mut self, serialized: Serialized) -> Entity;
}
