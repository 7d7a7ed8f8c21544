pub mod group;
pub mod handler_type;

pub use group::*;
pub use handler_type::*;
