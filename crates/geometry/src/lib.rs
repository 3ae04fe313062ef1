pub mod angle;
pub use angle::*;

pub mod angle_window;
pub use angle_window::*;

pub mod direction;
pub use direction::*;

pub mod grid;
pub use grid::*;
