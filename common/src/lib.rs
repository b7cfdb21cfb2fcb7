mod constants;
mod engine;
mod error;
mod frame;
mod geometry;

pub use constants::*;
pub use engine::*;
pub use error::*;
pub use frame::*;
pub use geometry::*;
