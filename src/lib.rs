//! Generation of square mazes that can be crossed moving only up and right,
//! and counting of every such (monotone) path from the start to each cell.
//!
//! ```
//! use num_bigint::BigUint;
//!
//! let mut maze = mazepaths::generate(12, 0.5, Some(7)).unwrap();
//! mazepaths::solve(&mut maze);
//!
//! let paths = mazepaths::enumerate_paths(&maze, 10_000);
//! if !paths.is_possibly_truncated() {
//!     assert_eq!(maze.exit_path_count(), BigUint::from(paths.len()));
//! }
//! ```

pub mod algorithms;
pub mod array;
pub mod config;
pub mod dims;
pub mod error;
pub mod gameboard;
pub mod solver;

pub use algorithms::{generate, is_solvable, MazeGenerator, Random};
pub use config::{Config, GeneratorConfig, SolverConfig};
pub use dims::Coord;
pub use error::MazeError;
pub use gameboard::{CellType, Maze};
pub use solver::{enumerate_paths, solve, solve_with, PathCounter, PathEnumeration, Solver};
