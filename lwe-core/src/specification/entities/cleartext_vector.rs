use crate::commons::parameters::CleartextCount;
use crate::specification::entities::markers::CleartextVectorKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying a cleartext vector.
pub trait CleartextVectorEntity: AbstractEntity<Kind = CleartextVectorKind> {
    /// Returns the number of cleartexts contained in the vector.
    fn cleartext_count(&self) -> CleartextCount;
}
