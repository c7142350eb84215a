use serde::{Deserialize, Serialize};

/// Approximate riders per vehicle used to size each group's cluster count
pub const DEFAULT_TARGET_CAPACITY: usize = 12;

pub const DEFAULT_MAX_ITERATIONS: usize = 30;

pub const DEFAULT_SEED: u64 = 42;

/// Parameters for a clustering run. All three affect reproducibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    pub target_capacity: usize,
    pub max_iterations: usize,
    pub seed: u64,
}

impl ClusterConfig {
    pub fn new() -> Self {
        Self {
            target_capacity: DEFAULT_TARGET_CAPACITY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }

    pub fn with_target_capacity(mut self, target_capacity: usize) -> Self {
        self.target_capacity = target_capacity;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self::new()
    }
}
