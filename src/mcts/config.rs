//! MCTS configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
///
/// Injected at engine construction, never read from globals, so tests can
/// vary budgets and seeds deterministically.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MctsConfig {
    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Wall-clock budget per search call.
    /// Default 140ms: sits under a 150ms harness limit, leaving margin
    /// for the one non-interruptible iteration that may overrun.
    pub time_budget: Duration,

    /// Random seed for expansion and rollout RNG.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            time_budget: Duration::from_millis(140),
            seed: 42,
        }
    }
}

impl MctsConfig {
    /// Create a new config with custom exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom time budget.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
