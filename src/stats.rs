//! Statistics collection for decisions
//!
//! This module provides structures for reporting how the last move was chosen
//! and how much search work went into it.

use std::fmt;
use std::time::Duration;

/// How a move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The move wins the game immediately
    Win,

    /// A safe king move towards a corner
    GreedyKing,

    /// The move captures an opponent piece
    Capture,

    /// The Monte Carlo search loop picked the move
    Search,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Decision::Win => "win",
            Decision::GreedyKing => "greedy king",
            Decision::Capture => "capture",
            Decision::Search => "search",
        };
        f.write_str(name)
    }
}

/// Statistics collected while choosing a move
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of completed passes over the root moves
    pub iterations: usize,

    /// Number of playouts run
    pub rollouts: usize,

    /// Total moves played across all playouts
    pub rollout_plies: usize,

    /// Total time spent choosing the move
    pub total_time: Duration,

    /// Whether the search loop was ended by the time budget
    pub stopped_early: bool,

    /// How the move was chosen
    pub decision: Option<Decision>,

    /// Won playouts per root move, in move enumeration order
    pub win_counts: Vec<u64>,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            rollouts: 0,
            rollout_plies: 0,
            total_time: Duration::from_secs(0),
            stopped_early: false,
            decision: None,
            win_counts: Vec::new(),
        }
    }

    /// Returns the average playout length in moves
    pub fn avg_rollout_length(&self) -> f64 {
        if self.rollouts == 0 {
            return 0.0;
        }
        self.rollout_plies as f64 / self.rollouts as f64
    }

    /// Returns the number of playouts per second
    pub fn rollouts_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.rollouts as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        let decision = self
            .decision
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string());
        format!(
            "Decision Statistics:\n\
             - Decision: {}\n\
             - Iterations: {}\n\
             - Rollouts: {}\n\
             - Avg rollout length: {:.1} moves\n\
             - Total time: {:.3} seconds\n\
             - Rollouts per second: {:.1}\n\
             - Stopped early: {}",
            decision,
            self.iterations,
            self.rollouts,
            self.avg_rollout_length(),
            self.total_time.as_secs_f64(),
            self.rollouts_per_second(),
            self.stopped_early
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
