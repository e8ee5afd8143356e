//! A module containing specifications of the entities manipulated by the engines.
//!
//! Every entity type implements the [`AbstractEntity`] trait, which ties it to a _kind_ marker,
//! plus the entity trait matching its kind, which exposes the few properties the engines need to
//! validate their inputs (a dimension, a count).

use markers::EntityKindMarker;
use std::fmt::Debug;

pub mod markers;

mod cleartext;
mod cleartext_vector;
mod encoder;
mod lwe_ciphertext;
mod lwe_ciphertext_vector;
mod lwe_secret_key;
mod plaintext;
mod plaintext_vector;

pub use cleartext::*;
pub use cleartext_vector::*;
pub use encoder::*;
pub use lwe_ciphertext::*;
pub use lwe_ciphertext_vector::*;
pub use lwe_secret_key::*;
pub use plaintext::*;
pub use plaintext_vector::*;

/// A top-level abstraction for entities.
///
/// An `AbstractEntity` type is nothing more than a type with an associated
/// [`Kind`](`AbstractEntity::Kind`) marker type, which encodes in the type system the abstract
/// nature of the object.
pub trait AbstractEntity: Debug + PartialEq {
    /// The _kind_ of the entity.
    type Kind: EntityKindMarker;
}
