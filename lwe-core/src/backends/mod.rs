//! A module containing the backends implementing the engines of the
//! [`specification`](crate::specification).

pub mod default;
