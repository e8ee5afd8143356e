use crate::specification::entities::markers::PlaintextKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying a plaintext.
///
/// # Formal Definition
///
/// A plaintext is an element of the ring $\mathbb{Z}\_q$, with $q = 2^w$ for a word of $w$ bits.
pub trait PlaintextEntity: AbstractEntity<Kind = PlaintextKind> {}
