//! Low-level cryptographic objects: encodings, LWE ciphertexts and secret keys.
//!
//! The objects of this module carry no check of their own; the engines of the
//! [`backends`](crate::backends) validate their inputs before calling into them.

pub mod encoding;
pub mod lwe;
pub mod secret;
