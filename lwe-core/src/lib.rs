#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Welcome to the `lwe-core` documentation!
//!
//! This library contains a minimal set of primitives of the LWE encryption scheme: encoding of real
//! numbers into fixed-point words, generation of binary secret keys, and encryption and
//! decryption of LWE ciphertexts, one at a time or in batches. No homomorphic operation is
//! implemented.
//!
//! # Audience
//!
//! This library is geared towards people who already know their way around lattice-based
//! cryptography. It gives the user freedom of choice over the parameters, which can lead to little
//! or no security if chosen incorrectly.
//!
//! # Architecture
//!
//! The library is organized around two modules:
//!
//! + The [`specification`](crate::specification) module contains a specification (in the form of
//! traits) of the operations and objects exposed by the library.
//! + The [`backends`](crate::backends) module contains the backend implementing this
//! specification on the cpu.
//!
//! On top of those, the [`boundary`](crate::boundary) module exposes the same operations through
//! opaque handles, for callers which can not manipulate the typed entities directly.
//!
//! # Activating features
//!
//! The `backend_default_serialization` feature flag activates the serialization of the entities of
//! the default backend with `bincode`.
//!
//! # Navigating the code
//!
//! If this is your first time looking at the code, it may be simpler for you to first have a look
//! at the [`specification`](crate::specification) module, which contains explanations on the
//! abstract API, and navigate from there.

pub mod backends;
pub mod boundary;
#[doc(hidden)]
pub mod commons;
pub mod prelude;
pub mod seeders;
pub mod specification;
