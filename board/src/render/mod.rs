pub mod board;
pub mod snake;
pub mod standard_renderer;
pub mod traits;
pub mod types;
