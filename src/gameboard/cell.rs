use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellType {
    Wall,
    Path,
    Start,
    Exit,
}

impl CellType {
    pub fn is_wall(self) -> bool {
        matches!(self, CellType::Wall)
    }

    /// Anything but a wall can be walked through, including both anchors.
    pub fn is_open(self) -> bool {
        !self.is_wall()
    }

    pub fn to_char(self) -> char {
        match self {
            CellType::Wall => '#',
            CellType::Path => '.',
            CellType::Start => 'S',
            CellType::Exit => 'E',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(CellType::Wall),
            '.' => Some(CellType::Path),
            'S' => Some(CellType::Start),
            'E' => Some(CellType::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
