use std::ops::RangeInclusive;

use rand::Rng as _;

use crate::{array::Array2D, dims::Coord, gameboard::CellType};

use super::Random;

/// Accepted range of the wall scarcity.
pub const SCARCITY_RANGE: RangeInclusive<f64> = 0.1..=0.9;

/// Opens each remaining interior wall with probability `scarcity`.
///
/// Border cells and both anchors are never touched. The RNG is only drawn from
/// for cells that are still walls.
pub fn open_random_walls(
    grid: &mut Array2D<CellType>,
    scarcity: f64,
    anchors: [Coord; 2],
    rng: &mut Random,
) {
    let inner = 1..grid.size() as i32 - 1;

    for row in inner.clone() {
        for col in inner.clone() {
            let pos = Coord(row, col);
            if anchors.contains(&pos) {
                continue;
            }

            if grid[pos] == CellType::Wall && rng.gen::<f64>() < scarcity {
                grid[pos] = CellType::Path;
            }
        }
    }
}
