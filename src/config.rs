use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Limits of the generate-and-check loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// How many carve/randomize/check rounds to try before giving up.
    pub max_attempts: usize,
    /// Wall clock limit for the whole generation, in milliseconds.
    pub time_budget_ms: Option<u64>,
}

impl GeneratorConfig {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

    /// `max_attempts` with a zero replaced by the default, since zero attempts can never succeed.
    pub fn effective_max_attempts(&self) -> usize {
        if self.max_attempts == 0 {
            log::warn!(
                "max_attempts of 0 ignored, using {}",
                Self::DEFAULT_MAX_ATTEMPTS
            );
            Self::DEFAULT_MAX_ATTEMPTS
        } else {
            self.max_attempts
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            time_budget_ms: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Mazes smaller than this are counted by walking every path, the rest by the sweep.
    pub recursive_threshold: usize,
    /// Cap on the number of explicit paths collected by the enumerator.
    pub max_solutions: usize,
}

impl SolverConfig {
    pub const DEFAULT_RECURSIVE_THRESHOLD: usize = 15;
    pub const DEFAULT_MAX_SOLUTIONS: usize = 10_000;
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            recursive_threshold: Self::DEFAULT_RECURSIVE_THRESHOLD,
            max_solutions: Self::DEFAULT_MAX_SOLUTIONS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub solver: SolverConfig,
}

impl Config {
    /// Reads a config written in RON. Missing fields keep their defaults.
    pub fn from_ron(s: &str) -> Result<Self> {
        Ok(ron::from_str(s)?)
    }
}
