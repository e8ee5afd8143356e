//! A module containing the [engines](crate::specification::engines) exposed by the default
//! backend.

mod default_engine;
pub use default_engine::*;

mod default_parallel_engine;
pub use default_parallel_engine::*;

#[cfg(feature = "backend_default_serialization")]
mod default_serialization_engine;
#[cfg(feature = "backend_default_serialization")]
pub use default_serialization_engine::*;

mod activated_generator;
pub use activated_generator::ActivatedRandomGenerator;
