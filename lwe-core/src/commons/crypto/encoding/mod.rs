//! Encoding cleartexts into plaintexts and back.
//!
//! A [`Cleartext`] holds a raw value. An [`Encoder`] maps it to a [`Plaintext`], a word of the
//! ring `Z/2^wZ` ready to be encrypted, and maps a (possibly noisy) plaintext back.

mod cleartext;
mod encoder;
mod plaintext;

pub use cleartext::*;
pub use encoder::*;
pub use plaintext::*;
