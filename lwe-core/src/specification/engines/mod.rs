//! A module containing specifications of the LWE engines.
//!
//! In essence, __engines__ are types which can be used to perform operations on entities. Each
//! operation is described by a trait, generic over the types of the entities involved, and
//! implemented by the engines able to execute it.
//!
//! # Operation semantics
//!
//! Every operation of this module is __pure__: it takes its inputs by reference, returns a fresh
//! output entity, and leaves its inputs untouched. The only exceptions are the __consuming__
//! operations, which take an entity by value and return the data it was built from.
//!
//! # Checked and unchecked operations
//!
//! Each operation comes in two flavors. The checked method verifies its inputs and returns an
//! error specific to the operation in case of failure. The `_unchecked` method skips those
//! checks; it is `unsafe`, since calling it with inputs that would fail the checks leaves the
//! behavior of the engine unspecified.
//!
//! # Errors
//!
//! The error returned by an operation is generated by the [`engine_error`] macro. It contains one
//! variant per _generic_ failure of the operation (failures any backend could run into, such as
//! two entities of incompatible dimensions), checked by its `perform_generic_checks` function,
//! plus an `Engine` variant wrapping the error _specific_ to the implementing engine.

use std::error::Error;

macro_rules! engine_error {
    ($name:ident for $trait:ident @ $($variants:ident => $messages:literal),*) => {
        #[doc = concat!("An error used with the [`", stringify!($trait), "`] trait.")]
        #[non_exhaustive]
        #[derive(Debug, Clone, Eq, PartialEq)]
        pub enum $name<EngineError: std::error::Error> {
            $(
                #[doc = "_Generic_ error: "]
                #[doc = $messages]
                $variants,
            )*
            #[doc = "_Specific_ error to the implementing engine."]
            Engine(EngineError),
        }

        impl<EngineError: std::error::Error> std::fmt::Display for $name<EngineError> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(
                        Self::$variants => write!(f, $messages),
                    )*
                    Self::Engine(error) => write!(f, "Error occurred in the engine: {}", error),
                }
            }
        }

        impl<EngineError: std::error::Error> std::error::Error for $name<EngineError> {}
    };
}
pub(crate) use engine_error;

pub(crate) mod sealed {
    pub trait AbstractEngineSeal {}
}

/// A top-level abstraction for engines.
///
/// An `AbstractEngine` is nothing more than a type with an associated error type
/// [`EngineError`](`AbstractEngine::EngineError`) and a constructor.
///
/// The associated error type is expected to describe the failures specific to the engine. For
/// instance, a failure to gather entropy when seeding the engine's generators.
pub trait AbstractEngine: sealed::AbstractEngineSeal {
    /// The error associated to the engine.
    type EngineError: Error;

    /// The constructor parameters type.
    type Parameters;

    /// A constructor for the engine.
    fn new(parameter: Self::Parameters) -> Result<Self, Self::EngineError>
    where
        Self: Sized;
}

mod cleartext_creation;
mod cleartext_encoding;
mod cleartext_retrieval;
mod cleartext_vector_creation;
mod cleartext_vector_encoding;
mod cleartext_vector_retrieval;
mod encoder_creation;
mod entity_deserialization;
mod entity_serialization;
mod lwe_ciphertext_consuming_retrieval;
mod lwe_ciphertext_creation;
mod lwe_ciphertext_decryption;
mod lwe_ciphertext_encryption;
mod lwe_ciphertext_vector_consuming_retrieval;
mod lwe_ciphertext_vector_creation;
mod lwe_ciphertext_vector_decryption;
mod lwe_ciphertext_vector_encryption;
mod lwe_secret_key_generation;
mod plaintext_creation;
mod plaintext_decoding;
mod plaintext_retrieval;
mod plaintext_vector_creation;
mod plaintext_vector_decoding;
mod plaintext_vector_retrieval;

pub use cleartext_creation::*;
pub use cleartext_encoding::*;
pub use cleartext_retrieval::*;
pub use cleartext_vector_creation::*;
pub use cleartext_vector_encoding::*;
pub use cleartext_vector_retrieval::*;
pub use encoder_creation::*;
pub use entity_deserialization::*;
pub use entity_serialization::*;
pub use lwe_ciphertext_consuming_retrieval::*;
pub use lwe_ciphertext_creation::*;
pub use lwe_ciphertext_decryption::*;
pub use lwe_ciphertext_encryption::*;
pub use lwe_ciphertext_vector_consuming_retrieval::*;
pub use lwe_ciphertext_vector_creation::*;
pub use lwe_ciphertext_vector_decryption::*;
pub use lwe_ciphertext_vector_encryption::*;
pub use lwe_secret_key_generation::*;
pub use plaintext_creation::*;
pub use plaintext_decoding::*;
pub use plaintext_retrieval::*;
pub use plaintext_vector_creation::*;
pub use plaintext_vector_decoding::*;
pub use plaintext_vector_retrieval::*;
