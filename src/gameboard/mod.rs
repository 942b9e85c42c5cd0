pub mod maze;
pub use maze::Maze;
pub mod cell;
pub use cell::{Cell, Direction, Edge};
