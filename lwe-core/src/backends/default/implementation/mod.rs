pub mod engines;
pub mod entities;
