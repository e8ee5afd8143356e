#![deny(rustdoc::broken_intra_doc_links)]
//! Cryptographically secure pseudo random number generation.
//!
//! This crate provides the two building blocks used by `lwe-core` to produce randomness:
//!
//! + [`seeders`]: sources of 128 bits seeds, drawn from the operating system or the hardware.
//! + [`generators`]: AES-128 in counter mode, expanding a single seed into a stream of bytes. The
//!   stream of a generator can be _forked_ into several non-overlapping children streams, which
//!   makes it possible to draw randomness from several threads without any synchronization.
//!
//! ```rust
//! use lwe_csprng::generators::{
//!     BytesPerChild, ChildrenCount, RandomGenerator, SoftwareRandomGenerator,
//! };
//! use lwe_csprng::seeders::Seed;
//!
//! let mut generator = SoftwareRandomGenerator::new(Seed(0));
//! let children = generator
//!     .try_fork(ChildrenCount(4), BytesPerChild(32))
//!     .unwrap()
//!     .collect::<Vec<_>>();
//! assert_eq!(children.len(), 4);
//! for child in children {
//!     assert_eq!(child.count(), 32);
//! }
//! ```

pub mod generators;
pub mod seeders;
