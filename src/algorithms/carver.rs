//! Randomized depth-first carving over the odd-offset lattice.
//!
//! From every cell the four axis directions are tried in a shuffled order. A
//! step jumps two cells; when the target lies strictly inside the border and
//! hasn't been visited, both the target and the cell jumped over become
//! passages and the search descends into the target before trying the next
//! direction. The result is a spanning tree of passages.
//!
//! The recursion is kept on an explicit stack of frames, so the order of
//! exploration (and of RNG draws) is the same as the recursive formulation
//! without any limit on depth.

use rand::seq::SliceRandom as _;

use crate::{array::Array2D, dims::Coord, gameboard::CellType};

use super::Random;

struct Frame {
    pos: Coord,
    dirs: [Coord; 4],
    next: usize,
}

impl Frame {
    fn enter(pos: Coord, visited: &mut Array2D<bool>, rng: &mut Random) -> Self {
        visited[pos] = true;
        let mut dirs = Coord::AXES;
        dirs.shuffle(rng);
        Frame { pos, dirs, next: 0 }
    }
}

/// Carves passages into `grid` starting from `from`. `visited` must be the same
/// size as `grid`; it is updated in place.
pub fn carve(
    grid: &mut Array2D<CellType>,
    visited: &mut Array2D<bool>,
    from: Coord,
    rng: &mut Random,
) {
    let inner = 1..grid.size() as i32 - 1;
    let mut stack = vec![Frame::enter(from, visited, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = frame.dirs.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let between = frame.pos + dir;
        let next = frame.pos + dir * 2;
        if !inner.contains(&next.0) || !inner.contains(&next.1) || visited[next] {
            continue;
        }

        grid[next] = CellType::Path;
        grid[between] = CellType::Path;
        stack.push(Frame::enter(next, visited, rng));
    }
}

#[cfg(test)]
mod tests {
    use hashbrown::HashSet;
    use rand::SeedableRng as _;

    use super::*;

    fn carved(size: usize, seed: u64) -> Array2D<CellType> {
        let mut grid = Array2D::new(CellType::Wall, size);
        let mut visited = Array2D::new(false, size);
        let mut rng = Random::seed_from_u64(seed);
        carve(&mut grid, &mut visited, Coord(size as i32 - 1, 1), &mut rng);
        grid
    }

    #[test]
    fn border_is_left_alone() {
        for size in [3, 6, 11, 24] {
            let grid = carved(size, 3);
            for pos in grid.iter_pos() {
                if pos.is_on_border(size) {
                    assert_eq!(grid[pos], CellType::Wall, "size {size} at {pos}");
                }
            }
        }
    }

    #[test]
    fn every_lattice_cell_is_carved() {
        // The start sits on the bottom border, lattice cells share its parity.
        let size = 12;
        let grid = carved(size, 42);
        let start = Coord(size as i32 - 1, 1);

        for pos in grid.iter_pos() {
            let on_lattice = (pos.0 - start.0) % 2 == 0 && (pos.1 - start.1) % 2 == 0;
            let inner = 1..size as i32 - 1;
            let inside = inner.contains(&pos.0) && inner.contains(&pos.1);
            if on_lattice && inside {
                assert_eq!(grid[pos], CellType::Path, "{pos} not carved");
            }
        }
    }

    #[test]
    fn carving_is_a_tree() {
        // A spanning tree over `n` lattice cells (plus the start) has exactly `n` connectors.
        let size = 15;
        let grid = carved(size, 7);
        let start = Coord(size as i32 - 1, 1);

        let mut lattice = 0;
        let mut connectors = 0;
        for pos in grid.iter_pos().filter(|&pos| grid[pos] == CellType::Path) {
            if (pos.0 - start.0) % 2 == 0 && (pos.1 - start.1) % 2 == 0 {
                lattice += 1;
            } else {
                connectors += 1;
            }
        }
        assert_eq!(lattice, connectors);

        // Everything carved is connected to the start.
        let mut seen = HashSet::new();
        let mut todo = vec![start];
        while let Some(pos) = todo.pop() {
            for dir in Coord::AXES {
                let next = pos + dir;
                if grid.get(next) == Some(&CellType::Path) && seen.insert(next) {
                    todo.push(next);
                }
            }
        }
        assert_eq!(seen.len(), lattice + connectors);
    }

    #[test]
    fn same_seed_same_carving() {
        assert_eq!(carved(20, 99), carved(20, 99));
    }
}
