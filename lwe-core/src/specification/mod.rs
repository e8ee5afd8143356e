//! A module containing the specification of the engine API.
//!
//! The specification is made of two parts:
//!
//! + The [`entities`] module, which contains traits implemented by the types manipulated by the
//! engines. Each entity trait is tied to a _kind_ marker, which encodes the abstract nature of the
//! entity (an LWE ciphertext, a plaintext vector, ...) in the type system.
//! + The [`engines`] module, which contains one trait per operation. An engine implementing an
//! operation trait for a set of entity types can execute this operation on those types.
//!
//! Backends implement those traits for their own types. The [`default`](crate::backends::default)
//! backend is the only backend of this crate.

pub mod engines;
pub mod entities;
