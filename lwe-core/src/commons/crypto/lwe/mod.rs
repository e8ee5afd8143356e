//! LWE ciphertexts.
//!
//! An LWE ciphertext of dimension `n` is made of `n` mask words followed by one body word. The
//! body of the encryption of `m` under the key `s` is `b = <mask, s> + m + e`, for a noise `e`.

mod ciphertext;
mod list;

pub use ciphertext::*;
pub use list::*;
