//! A module implementing the random generator api with batched aes calls.
//!
//! This module provides a generic [`AesCtrGenerator`] structure which implements the
//! [`super::RandomGenerator`] api using the AES block cipher in counter mode. That is, the
//! generator holds a state (i.e. counter) which is incremented iteratively, to produce the stream
//! of random values:
//! ```ascii
//!              ╔═══════╗           ╔═══════╗           ╔═══════╗
//!     counter ═╣ AES_k ╠═► ouput   ║ AES_k ║           ║ AES_k ║
//!              ╚═══════╝       ┌──►╚═══════╝       ┌──►╚═══════╝
//!              counter + 1 ────┘   counter + 2 ────┘    ...
//! ```
//!
//! The key `k` is the seed of the generator. Each call to the block cipher produces
//! [`BYTES_PER_AES_CALL`] bytes, which are output one by one. A byte of the stream is located by a
//! [`TableIndex`]: the counter value of the aes call which produced it, and its position in the
//! output of that call.

/// The number of bytes generated by a single aes call.
pub const BYTES_PER_AES_CALL: usize = 128 / 8;

mod index;
pub use index::*;

mod block_cipher;
pub use block_cipher::*;

mod generic;
pub use generic::*;
