pub mod cell;
pub use cell::CellType;
pub mod maze;
pub use maze::{Maze, MIN_SIZE};
