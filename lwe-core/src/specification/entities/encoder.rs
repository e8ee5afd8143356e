use crate::specification::entities::markers::EncoderKind;
use crate::specification::entities::AbstractEntity;

/// A trait implemented by types embodying an encoder.
///
/// An encoder maps cleartexts to plaintexts and back.
pub trait EncoderEntity: AbstractEntity<Kind = EncoderKind> {}
