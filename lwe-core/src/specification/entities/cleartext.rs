use crate::specification::entities::markers::CleartextKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying a cleartext.
///
/// A cleartext is a raw value, before it is encoded into a plaintext.
pub trait CleartextEntity: AbstractEntity<Kind = CleartextKind> {}
