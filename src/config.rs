//! Configuration options for the decision engine
//!
//! This module defines the parameters that control the time budget, the
//! heuristic evaluator and which tactical shortcuts are enabled.

use std::time::Duration;

use crate::{AgentError, Result};

/// Weights of the heuristic evaluator terms
///
/// Every term is scaled by one of these integers. The defaults reproduce the
/// tuning the engine was developed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicWeights {
    /// Weight of the material difference between the two sides
    pub piece_count: i64,

    /// Weight of the king's distance to the nearest corner
    pub king_distance: i64,

    /// Weight of each piece's distance to the king
    pub king_proximity: i64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            piece_count: 2,
            king_distance: 10,
            king_proximity: 1,
        }
    }
}

/// Configuration for the decision engine
///
/// Use the builder methods to create a customized configuration.
///
/// # Example
///
/// ```
/// use tablut_agent::EngineConfig;
/// use std::time::Duration;
///
/// let config = EngineConfig::default()
///     .with_time_budget(Duration::from_millis(1500))
///     .with_capture_shortcut(false)
///     .with_seed(42);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Wall-clock time allowed for the Monte Carlo loop
    ///
    /// Checked before each pass over the root moves; a pass in flight is
    /// allowed to finish, so the call may overrun slightly.
    pub time_budget: Duration,

    /// Optional cap on the number of passes over the root moves
    pub max_iterations: Option<usize>,

    /// Heuristic weights used to pick the reply each playout starts from
    pub weights: HeuristicWeights,

    /// Whether the king side may take a safe king move towards a corner
    /// without searching
    pub greedy_king_shortcut: bool,

    /// Whether a capturing move is played without searching
    pub capture_shortcut: bool,

    /// Seed for the playout random number generator
    ///
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            time_budget: Duration::from_millis(1000),
            max_iterations: None,
            weights: HeuristicWeights::default(),
            greedy_king_shortcut: true,
            capture_shortcut: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the time budget for the search loop
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Sets the maximum number of passes over the root moves
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }

    /// Sets the heuristic weights
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables or disables the greedy king shortcut
    pub fn with_greedy_king_shortcut(mut self, enabled: bool) -> Self {
        self.greedy_king_shortcut = enabled;
        self
    }

    /// Enables or disables the capture shortcut
    pub fn with_capture_shortcut(mut self, enabled: bool) -> Self {
        self.capture_shortcut = enabled;
        self
    }

    /// Seeds the playout random number generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidConfiguration`] for negative weights or an
    /// iteration cap of zero.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        if w.piece_count < 0 || w.king_distance < 0 || w.king_proximity < 0 {
            return Err(AgentError::InvalidConfiguration(format!(
                "heuristic weights must be non-negative, got {:?}",
                w
            )));
        }
        if self.max_iterations == Some(0) {
            return Err(AgentError::InvalidConfiguration(
                "max_iterations must be at least 1; use a zero time budget to skip the search"
                    .to_string(),
            ));
        }
        Ok(())
    }
}
