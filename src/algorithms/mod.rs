pub mod carver;
pub mod reachability;
pub mod scarcity;

use std::time::{Duration, Instant};

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{
    array::Array2D,
    config::GeneratorConfig,
    dims::Coord,
    error::{MazeError, Result},
    gameboard::{CellType, Maze},
};

pub use reachability::{exit_reachability, is_reachable, is_solvable};
pub use scarcity::SCARCITY_RANGE;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Smallest maze `generate` accepts. A side of 2 leaves no interior to carve.
pub const MIN_GENERATED_SIZE: usize = 3;

/// Builds mazes by carving, opening random walls and keeping the first result
/// the exit can be reached in, moving only up and right.
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator {
    config: GeneratorConfig,
}

impl MazeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a solvable maze of side `size`.
    ///
    /// The same `seed` always gives the same maze. Without one, a seed is drawn
    /// from the thread RNG and logged.
    pub fn generate(&self, size: usize, scarcity: f64, seed: Option<u64>) -> Result<Maze> {
        Self::validate(size, scarcity)?;

        let seed = seed.unwrap_or_else(|| {
            let seed: u64 = thread_rng().gen();
            log::info!("Generating maze with seed {}", seed);
            seed
        });
        let mut rng = Random::seed_from_u64(seed);

        let max_attempts = self.config.effective_max_attempts();
        let deadline = self
            .config
            .time_budget_ms
            .map(|ms| Instant::now() + Duration::from_millis(ms));

        let start = Maze::start_for(size);
        let exit = Maze::exit_for(size);
        let mut grid = Array2D::new(CellType::Wall, size);
        let mut visited = Array2D::new(false, size);

        for attempt in 1..=max_attempts {
            grid.fill(CellType::Wall);
            visited.fill(false);

            carver::carve(&mut grid, &mut visited, start, &mut rng);
            grid[start] = CellType::Start;
            grid[exit] = CellType::Exit;
            scarcity::open_random_walls(&mut grid, scarcity, [start, exit], &mut rng);

            if is_reachable(&grid, start, exit) {
                log::debug!(
                    "Generated {}x{} maze (scarcity {}) after {} attempt(s)",
                    size,
                    size,
                    scarcity,
                    attempt
                );
                return Ok(Maze::from_generated(grid));
            }

            log::debug!("Maze attempt {} is unsolvable, regenerating", attempt);

            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                log::warn!("Maze generation ran out of time after {} attempts", attempt);
                return Err(MazeError::GenerationExhausted { attempts: attempt });
            }
        }

        log::warn!("No solvable maze after {} attempts", max_attempts);
        Err(MazeError::GenerationExhausted {
            attempts: max_attempts,
        })
    }

    fn validate(size: usize, scarcity: f64) -> Result<()> {
        if size < MIN_GENERATED_SIZE {
            return Err(MazeError::InvalidSize {
                size,
                min: MIN_GENERATED_SIZE,
            });
        }

        // Also rejects NaN.
        if !SCARCITY_RANGE.contains(&scarcity) {
            return Err(MazeError::InvalidScarcity(scarcity));
        }

        Ok(())
    }
}

/// Generates a maze with the default attempt budget.
pub fn generate(size: usize, scarcity: f64, seed: Option<u64>) -> Result<Maze> {
    MazeGenerator::default().generate(size, scarcity, seed)
}

/// Whether every border cell is a wall, apart from the start and the exit.
pub fn has_closed_border(maze: &Maze) -> bool {
    maze.layout().iter_pos().all(|pos: Coord| {
        !pos.is_on_border(maze.size())
            || pos == maze.start()
            || pos == maze.exit()
            || maze.is_wall(pos)
    })
}
