//! The portable generator: AES-128 in counter mode, computed by the `aes` crate.

mod block_cipher;
mod generator;
#[cfg(feature = "parallel")]
mod parallel;

pub use generator::*;
#[cfg(feature = "parallel")]
pub use parallel::*;
