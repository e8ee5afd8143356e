use crate::commons::parameters::PlaintextCount;
use crate::specification::entities::markers::PlaintextVectorKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying a plaintext vector.
pub trait PlaintextVectorEntity: AbstractEntity<Kind = PlaintextVectorKind> {
    /// Returns the number of plaintexts contained in the vector.
    fn plaintext_count(&self) -> PlaintextCount;
}
