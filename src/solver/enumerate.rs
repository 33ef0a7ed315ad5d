use std::iter;

use crate::{algorithms::exit_reachability, dims::Coord, gameboard::Maze};

/// Explicit monotone paths, each from the start to the exit inclusive.
///
/// Both anchors are part of every path, so a path of `k` moves holds `k + 1`
/// coordinates, the last one being the exit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathEnumeration {
    pub paths: Vec<Vec<Coord>>,
    /// The cap the enumeration ran with.
    pub limit: usize,
}

impl PathEnumeration {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// True when the cap was hit, in which case more paths may exist.
    pub fn is_possibly_truncated(&self) -> bool {
        self.paths.len() >= self.limit
    }
}

/// Collects up to `max_solutions` monotone paths by depth-first search, trying
/// up before right.
///
/// Cells the exit can't be reached from are never entered, which doesn't
/// change which paths are found nor their order.
pub fn enumerate_paths(maze: &Maze, max_solutions: usize) -> PathEnumeration {
    let mut paths = Vec::new();
    if max_solutions == 0 {
        return PathEnumeration {
            paths,
            limit: max_solutions,
        };
    }

    let reaches = exit_reachability(maze);
    let mut stack = vec![(maze.start(), 0usize)];

    while let Some((pos, next)) = stack.last_mut() {
        let Some(&dir) = Coord::MONOTONE_MOVES.get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;

        let to = *pos + dir;
        if !reaches.get(to).copied().unwrap_or(false) {
            continue;
        }

        if to == maze.exit() {
            let path = stack.iter().map(|&(pos, _)| pos).chain(iter::once(to));
            paths.push(path.collect());
            if paths.len() >= max_solutions {
                log::debug!("Path enumeration stopped at {} paths", max_solutions);
                break;
            }
        } else {
            stack.push((to, 0));
        }
    }

    PathEnumeration {
        paths,
        limit: max_solutions,
    }
}
