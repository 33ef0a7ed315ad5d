use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Grid position as `(row, col)`. Row `0` is the top of the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord(pub i32, pub i32);

impl Coord {
    pub const ZERO: Coord = Coord(0, 0);
    pub const UP: Coord = Coord(-1, 0);
    pub const RIGHT: Coord = Coord(0, 1);
    pub const DOWN: Coord = Coord(1, 0);
    pub const LEFT: Coord = Coord(0, -1);

    /// Moves the solver is allowed to make, in the order they are tried.
    pub const MONOTONE_MOVES: [Coord; 2] = [Coord::UP, Coord::RIGHT];

    /// All four axis directions, used by the carver.
    pub const AXES: [Coord; 4] = [Coord::RIGHT, Coord::DOWN, Coord::LEFT, Coord::UP];

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    /// Whether the position lies on the outer ring of a square grid of side `size`.
    pub fn is_on_border(self, size: usize) -> bool {
        let last = size as i32 - 1;
        self.row() == 0 || self.col() == 0 || self.row() == last || self.col() == last
    }

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    /// Row-major index into a square grid of side `size`, `None` when outside of it.
    pub fn linear_index(self, size: usize) -> Option<usize> {
        if !self.all_non_negative() {
            return None;
        }

        let (row, col) = (self.0 as usize, self.1 as usize);
        if row >= size || col >= size {
            return None;
        }

        Some(row * size + col)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, other: Coord) -> Coord {
        Coord(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Coord {
    type Output = Coord;

    fn sub(self, other: Coord) -> Coord {
        Coord(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, other: Coord) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Coord {
    fn sub_assign(&mut self, other: Coord) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    fn mul(self, other: i32) -> Coord {
        Coord(self.0 * other, self.1 * other)
    }
}

impl From<(i32, i32)> for Coord {
    fn from(tuple: (i32, i32)) -> Self {
        Coord(tuple.0, tuple.1)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(val: Coord) -> Self {
        (val.0, val.1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}
