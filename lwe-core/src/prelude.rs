//! Module with the definition of the prelude.
//!
//! The prelude gathers the engines, entities and parameters of the library, so that a single
//! glob import is enough to use it.

pub use super::backends::default::engines::*;
pub use super::backends::default::entities::*;
pub use super::boundary::*;
pub use super::commons::dispersion::*;
pub use super::commons::parameters::*;
pub use super::seeders::*;
pub use super::specification::engines::*;
pub use super::specification::entities::markers::*;
pub use super::specification::entities::*;
