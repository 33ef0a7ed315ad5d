use std::{fmt, str::FromStr};

use hashbrown::HashMap;
use num_bigint::BigUint;
use num_traits::{One as _, Zero as _};

use crate::{
    array::Array2D,
    dims::Coord,
    error::{MazeError, Result},
    gameboard::cell::CellType,
};

/// Smallest grid that still has both anchors and a border.
pub const MIN_SIZE: usize = 2;

/// Square maze with its start in the bottom row and its exit in the top row.
///
/// The layout never changes after construction. `memory` holds the number of
/// monotone (up/right) paths from the start to each cell and is filled by
/// [`crate::solver::solve`]; a cell missing from it has a count of zero.
#[derive(Debug, Clone)]
pub struct Maze {
    layout: Array2D<CellType>,
    start: Coord,
    exit: Coord,
    pub(crate) memory: HashMap<Coord, BigUint>,
}

impl Maze {
    pub fn start_for(size: usize) -> Coord {
        Coord(size as i32 - 1, 1)
    }

    pub fn exit_for(size: usize) -> Coord {
        Coord(0, size as i32 - 2)
    }

    /// Wraps a layout produced by the generator, which upholds every invariant.
    pub(crate) fn from_generated(layout: Array2D<CellType>) -> Self {
        let size = layout.size();
        debug_assert!(Self::validate(&layout).is_ok());
        Self::with_anchors(layout, Self::start_for(size), Self::exit_for(size))
    }

    /// Builds a maze from a complete layout, checking the anchor and border invariants.
    pub fn from_layout(layout: Array2D<CellType>) -> Result<Self> {
        Self::validate(&layout)?;

        let size = layout.size();
        Ok(Self::with_anchors(
            layout,
            Self::start_for(size),
            Self::exit_for(size),
        ))
    }

    fn with_anchors(layout: Array2D<CellType>, start: Coord, exit: Coord) -> Self {
        let mut maze = Maze {
            layout,
            start,
            exit,
            memory: HashMap::new(),
        };
        maze.reset_memory();
        maze
    }

    fn validate(layout: &Array2D<CellType>) -> Result<()> {
        let size = layout.size();
        if size < MIN_SIZE {
            return Err(MazeError::InvalidSize {
                size,
                min: MIN_SIZE,
            });
        }

        let (start, exit) = (Self::start_for(size), Self::exit_for(size));

        for pos in layout.iter_pos() {
            let cell = layout[pos];
            let expected = if pos == start {
                Some(CellType::Start)
            } else if pos == exit {
                Some(CellType::Exit)
            } else if pos.is_on_border(size) {
                Some(CellType::Wall)
            } else {
                None
            };

            let misplaced_anchor =
                expected.is_none() && !matches!(cell, CellType::Wall | CellType::Path);
            if misplaced_anchor || expected.is_some_and(|e| e != cell) {
                return Err(MazeError::InvalidLayout {
                    pos,
                    reason: format!("unexpected '{}'", cell),
                });
            }
        }

        Ok(())
    }

    pub fn size(&self) -> usize {
        self.layout.size()
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn exit(&self) -> Coord {
        self.exit
    }

    pub fn layout(&self) -> &Array2D<CellType> {
        &self.layout
    }

    pub fn cell(&self, pos: Coord) -> Option<CellType> {
        self.layout.get(pos).copied()
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        self.layout.is_in_bounds(pos)
    }

    /// Whether the position can be stepped on. Positions outside of the grid can't.
    pub fn is_open(&self, pos: Coord) -> bool {
        self.cell(pos).is_some_and(CellType::is_open)
    }

    pub fn is_wall(&self, pos: Coord) -> bool {
        self.cell(pos).is_some_and(CellType::is_wall)
    }

    pub fn memory(&self) -> &HashMap<Coord, BigUint> {
        &self.memory
    }

    /// Number of monotone paths recorded for `pos`, zero when nothing was recorded.
    pub fn path_count(&self, pos: Coord) -> BigUint {
        self.memory.get(&pos).cloned().unwrap_or_else(BigUint::zero)
    }

    pub fn exit_path_count(&self) -> BigUint {
        self.path_count(self.exit)
    }

    /// Forgets every solved count, leaving only the start seeded with one.
    pub fn reset_memory(&mut self) {
        self.memory.clear();
        self.memory.insert(self.start, BigUint::one());
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.layout.rows() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    /// Parses the format produced by `Display`: one line per row, `#` wall,
    /// `.` path, `S` start and `E` exit. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.chars()
                    .map(|c| {
                        CellType::from_char(c).ok_or_else(|| MazeError::Parse {
                            line: i + 1,
                            reason: format!("unknown cell '{}'", c),
                        })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        let height = rows.len();
        let layout = Array2D::try_from(rows).map_err(|width| MazeError::Parse {
            line: 0,
            reason: format!("row of width {} in a maze of height {}", width, height),
        })?;

        Self::from_layout(layout)
    }
}
