use super::engine_error;
use crate::specification::engines::AbstractEngine;
use crate::specification::entities::AbstractEntity;

engine_error! {
    EntitySerializationError for EntitySerializationEngine @
}

/// A trait for engines serializing entities.
///
/// # Semantics
///
/// This [pure](super#operation-semantics) operation serializes the `entity` into a
/// `Serialized` value.
pub trait EntitySerializationEngine<Entity, Serialized>: AbstractEngine
where
    Entity: AbstractEntity,
{
    /// Serializes an entity.
    fn serialize(
        &mut self,
        entity: &Entity,
    ) -> Result<Serialized, EntitySerializationError<Self::EngineError>>;

    /// Unchecked version of [`Self::serialize`].
    ///
    /// # Safety
    /// The inputs must not trigger any of the generic [`EntitySerializationError`] variants.
    unsafe fn serialize_unchecked(&mut self, entity: &Entity) -> Serialized;
}
