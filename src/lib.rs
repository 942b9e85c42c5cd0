pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod progress;

pub use algorithms::{generate, GrowingTree, MazeSpec, Outcome, Random, RandomSource, Step};
pub use dims::Dims;
pub use gameboard::{Cell, Direction, Edge, Maze};
