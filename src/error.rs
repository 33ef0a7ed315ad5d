use thiserror::Error;

use crate::dims::Coord;

#[derive(Debug, Error)]
pub enum MazeError {
    #[error("Invalid maze size {size}, must be at least {min}")]
    InvalidSize { size: usize, min: usize },
    #[error("Invalid scarcity {0}, must be within [0.1, 0.9]")]
    InvalidScarcity(f64),
    #[error("No solvable maze found after {attempts} attempts")]
    GenerationExhausted { attempts: usize },
    #[error("Invalid maze text on line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("Invalid maze layout at {pos}: {reason}")]
    InvalidLayout { pos: Coord, reason: String },
    #[error("Invalid config: {0}")]
    Config(#[from] ron::error::SpannedError),
}

pub type Result<T, E = MazeError> = std::result::Result<T, E>;
