//! Reachability under the monotone movement model, where the only legal moves
//! are one step up or one step right.
//!
//! This is stricter than plain connectivity: a maze can be fully connected and
//! still unsolvable when every route to the exit has to go down or left.

use std::collections::VecDeque;

use crate::{
    array::Array2D,
    dims::Coord,
    gameboard::{CellType, Maze},
};

/// Breadth-first search from `start` that reports whether `exit` gets dequeued.
pub fn is_reachable(grid: &Array2D<CellType>, start: Coord, exit: Coord) -> bool {
    let mut visited = Array2D::new(false, grid.size());
    let mut queue = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if pos == exit {
            return true;
        }

        for dir in Coord::MONOTONE_MOVES {
            let next = pos + dir;
            let explorable = grid.get(next).is_some_and(|cell| cell.is_open())
                && !visited[next];

            if explorable {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    false
}

/// Whether `maze.exit()` can be reached from `maze.start()` moving only up or right.
pub fn is_solvable(maze: &Maze) -> bool {
    is_reachable(maze.layout(), maze.start(), maze.exit())
}

/// Marks every cell from which the exit can be reached moving only up or right.
///
/// Each cell depends on the one above it and the one to its right, so rows are
/// processed top to bottom and columns right to left.
pub fn exit_reachability(maze: &Maze) -> Array2D<bool> {
    let size = maze.size() as i32;
    let mut reaches = Array2D::new(false, maze.size());

    for row in 0..size {
        for col in (0..size).rev() {
            let pos = Coord(row, col);
            reaches[pos] = pos == maze.exit()
                || (maze.is_open(pos)
                    && Coord::MONOTONE_MOVES
                        .iter()
                        .any(|&dir| reaches.get(pos + dir).copied().unwrap_or(false)));
        }
    }

    reaches
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_corridor_is_solvable() {
        let maze: Maze = "
            #E#
            #.#
            #S#
        "
        .parse()
        .unwrap();

        assert!(is_solvable(&maze));
    }

    #[test]
    fn connected_but_not_monotone() {
        // The only route climbs column 1, then has to go down column 3 before
        // climbing column 5 to the exit.
        let maze: Maze = "
            #####E#
            #...#.#
            #.#.#.#
            #.#.#.#
            #.#.#.#
            #.#...#
            #S#####
        "
        .parse()
        .unwrap();

        assert!(!is_solvable(&maze));
        assert!(!exit_reachability(&maze)[maze.start()]);
    }

    #[test]
    fn up_and_right_staircase() {
        let maze: Maze = "
            ####E#
            ###..#
            ##..##
            #..###
            #.####
            #S####
        "
        .parse()
        .unwrap();

        assert!(is_solvable(&maze));

        let reaches = exit_reachability(&maze);
        assert!(reaches[maze.start()]);
        assert!(reaches[Coord(2, 3)]);
        assert!(!reaches[Coord(0, 0)]);
    }

    #[test]
    fn reverse_mask_does_not_depend_on_start() {
        let maze: Maze = "
            ###E#
            #...#
            #.#.#
            #.#.#
            #S###
        "
        .parse()
        .unwrap();

        let reaches = exit_reachability(&maze);
        assert!(reaches[maze.start()]);
        assert!(reaches[Coord(1, 1)]);
        // Column 3 isn't reachable from the start, but it leads to the exit.
        assert!(reaches[Coord(3, 3)]);
        assert!(!reaches[Coord(2, 2)]);
    }
}
