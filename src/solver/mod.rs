//! Counting of monotone paths.
//!
//! A monotone path only ever steps up or right. After solving, the maze's
//! memory holds for every reachable cell the number of such paths from the
//! start to that cell. Two strategies produce identical counts: walking every
//! path (cheap on small mazes, exponential on big ones) and a row-by-row sweep.

pub mod enumerate;

use std::fmt;

use num_bigint::BigUint;

use crate::{array::Array2D, config::SolverConfig, dims::Coord, gameboard::Maze};

pub use enumerate::{enumerate_paths, PathEnumeration};

pub trait PathCounter: fmt::Debug + Sync + Send {
    /// Records path counts into `maze`'s memory.
    fn count(&self, maze: &mut Maze);
}

/// Walks every monotone path from the start, one step at a time.
///
/// Every time a step lands on an open cell, that cell gains one path. The walk
/// doesn't continue past the exit. Counts are added on top of what the memory
/// already holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveWalk;

impl PathCounter for RecursiveWalk {
    fn count(&self, maze: &mut Maze) {
        let mut walked = Array2D::new(0u64, maze.size());
        let mut stack = vec![(maze.start(), 0usize)];

        while let Some((pos, next)) = stack.last_mut() {
            let Some(&dir) = Coord::MONOTONE_MOVES.get(*next) else {
                stack.pop();
                continue;
            };
            *next += 1;

            let to = *pos + dir;
            if !maze.is_open(to) {
                continue;
            }

            walked[to] += 1;
            if to != maze.exit() {
                stack.push((to, 0));
            }
        }

        for pos in walked.iter_pos() {
            let paths = walked[pos];
            if paths > 0 {
                *maze.memory.entry(pos).or_default() += paths;
            }
        }
    }
}

/// Resolves counts bottom-up: each open cell sums its left and lower neighbors.
///
/// Rows go from just above the start row to row 1, columns left to right. The
/// exit row is outside of the sweep, so the exit then copies the count of the
/// cell right below it. Every swept cell is overwritten.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sweep;

impl PathCounter for Sweep {
    fn count(&self, maze: &mut Maze) {
        let size = maze.size() as i32;

        for row in (1..size - 1).rev() {
            for col in 1..size {
                let pos = Coord(row, col);
                if !maze.is_open(pos) {
                    continue;
                }

                let paths: BigUint = [pos + Coord::LEFT, pos + Coord::DOWN]
                    .into_iter()
                    .filter(|&from| maze.is_open(from))
                    .map(|from| maze.path_count(from))
                    .sum();
                maze.memory.insert(pos, paths);
            }
        }

        let exit = maze.exit();
        let below = maze.path_count(exit + Coord::DOWN);
        maze.memory.insert(exit, below);
    }
}

/// Picks the counting strategy by maze size.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn strategy_for(&self, size: usize) -> &'static dyn PathCounter {
        if size < self.config.recursive_threshold {
            &RecursiveWalk
        } else {
            &Sweep
        }
    }

    /// Fills `maze`'s memory with monotone path counts.
    ///
    /// Call once per analysis: the walking strategy adds to existing counts, so
    /// solving twice without [`Maze::reset_memory`] doubles them.
    pub fn solve<'m>(&self, maze: &'m mut Maze) -> &'m mut Maze {
        let strategy = self.strategy_for(maze.size());
        log::trace!("Solving {}x{} maze with {:?}", maze.size(), maze.size(), strategy);
        solve_with(maze, strategy)
    }

    pub fn enumerate_paths(&self, maze: &Maze) -> PathEnumeration {
        enumerate_paths(maze, self.config.max_solutions)
    }
}

/// Solves with the default size threshold, see [`Solver::solve`].
pub fn solve(maze: &mut Maze) -> &mut Maze {
    Solver::default().solve(maze)
}

/// Solves with an explicitly chosen strategy.
pub fn solve_with<'m>(maze: &'m mut Maze, strategy: &dyn PathCounter) -> &'m mut Maze {
    strategy.count(maze);
    maze
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRAIDED: &str = "
        #####E#
        #.....#
        #.#...#
        #.....#
        #..#..#
        #.....#
        #S#####
    ";

    fn counted(text: &str, strategy: &dyn PathCounter) -> Maze {
        let mut maze: Maze = text.parse().unwrap();
        solve_with(&mut maze, strategy);
        maze
    }

    #[test]
    fn single_corridor_has_one_path() {
        let text = "
            ###E#
            #...#
            #.###
            #.###
            #S###
        ";
        for strategy in [&RecursiveWalk as &dyn PathCounter, &Sweep] {
            let maze = counted(text, strategy);
            assert_eq!(maze.exit_path_count(), BigUint::from(1u32), "{strategy:?}");
            assert_eq!(maze.path_count(Coord(1, 2)), BigUint::from(1u32));
        }
    }

    #[test]
    fn open_grid_counts_are_binomial() {
        // Interior of a 6x6 maze fully open: the start enters at (4, 1), the exit
        // leaves from (1, 4), so there are C(6, 3) = 20 ways across.
        let text = "
            ####E#
            #....#
            #....#
            #....#
            #....#
            #S####
        ";
        for strategy in [&RecursiveWalk as &dyn PathCounter, &Sweep] {
            let maze = counted(text, strategy);
            assert_eq!(maze.exit_path_count(), BigUint::from(20u32), "{strategy:?}");
            assert_eq!(maze.path_count(Coord(4, 4)), BigUint::from(1u32));
            assert_eq!(maze.path_count(Coord(2, 2)), BigUint::from(3u32));
        }
    }

    #[test]
    fn strategies_agree_on_every_cell() {
        let walk = counted(BRAIDED, &RecursiveWalk);
        let sweep = counted(BRAIDED, &Sweep);

        for pos in walk.layout().iter_pos() {
            assert_eq!(walk.path_count(pos), sweep.path_count(pos), "at {pos}");
        }
        assert!(walk.exit_path_count() > BigUint::from(1u32));
    }

    #[test]
    fn walls_never_get_counts() {
        for strategy in [&RecursiveWalk as &dyn PathCounter, &Sweep] {
            let maze = counted(BRAIDED, strategy);
            for pos in maze.memory().keys() {
                assert!(!maze.is_wall(*pos), "{strategy:?} counted wall {pos}");
            }
        }
    }

    #[test]
    fn start_keeps_its_single_path() {
        for strategy in [&RecursiveWalk as &dyn PathCounter, &Sweep] {
            let maze = counted(BRAIDED, strategy);
            assert_eq!(maze.path_count(maze.start()), BigUint::from(1u32));
        }
    }

    #[test]
    fn unreachable_cells_count_zero() {
        let text = "
            ###E#
            #...#
            #.#.#
            #.#.#
            #S###
        ";
        let walk = counted(text, &RecursiveWalk);
        let sweep = counted(text, &Sweep);

        assert_eq!(walk.path_count(Coord(3, 3)), BigUint::from(0u32));
        assert_eq!(sweep.path_count(Coord(3, 3)), BigUint::from(0u32));
        assert!(!walk.memory().contains_key(&Coord(3, 3)));
    }

    #[test]
    fn threshold_picks_strategy() {
        let solver = Solver::default();
        assert_eq!(format!("{:?}", solver.strategy_for(14)), "RecursiveWalk");
        assert_eq!(format!("{:?}", solver.strategy_for(15)), "Sweep");

        let solver = Solver::new(SolverConfig {
            recursive_threshold: 4,
            ..Default::default()
        });
        assert_eq!(format!("{:?}", solver.strategy_for(4)), "Sweep");
    }

    #[test]
    fn solving_twice_accumulates_walks_but_not_sweeps() {
        let mut maze: Maze = BRAIDED.parse().unwrap();
        solve_with(&mut maze, &RecursiveWalk);
        let once = maze.exit_path_count();
        solve_with(&mut maze, &RecursiveWalk);
        assert_eq!(maze.exit_path_count(), once.clone() * 2u32);

        maze.reset_memory();
        solve_with(&mut maze, &Sweep);
        solve_with(&mut maze, &Sweep);
        assert_eq!(maze.exit_path_count(), once);
    }

    #[test]
    fn smallest_maze_has_no_path() {
        for strategy in [&RecursiveWalk as &dyn PathCounter, &Sweep] {
            let maze = counted("E#\n#S", strategy);
            assert_eq!(maze.exit_path_count(), BigUint::from(0u32));
        }
    }
}
