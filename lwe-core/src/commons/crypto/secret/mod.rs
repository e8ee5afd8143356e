//! Secret keys and the generators producing secret material.

pub mod generators;

mod lwe;

pub use lwe::*;
