mod soft;
pub use soft::*;
