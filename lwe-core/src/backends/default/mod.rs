//! A module containing the default backend.
//!
//! This backend implements the engines on the CPU, using the primitives of the
//! [`commons`](crate::commons) module. It exposes:
//!
//! + [`DefaultEngine`](engines::DefaultEngine): every operation, for 32 and 64 bits integers.
//! + [`DefaultParallelEngine`](engines::DefaultParallelEngine): the vector operations, spread over
//!   the threads of the `rayon` pool.
//! + `DefaultSerializationEngine`: conversion of entities to and from bytes, behind the
//!   `backend_default_serialization` feature.

mod implementation;

pub use implementation::{engines, entities};
