//! Mathematical primitives used by the cryptographic layer.

pub mod random;
pub mod tensor;
pub mod torus;
