//! Common tools shared by the backends: numeric traits, random generation, and the
//! cryptographic objects the engines are built upon.

pub mod crypto;
pub mod dispersion;
pub mod math;
pub mod numeric;
pub mod parameters;

#[cfg(test)]
pub mod test_tools;
