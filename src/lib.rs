//! # tablut-agent
//!
//! A turn-based decision engine for Tablut-style capture games, where one side
//! escorts a king to a corner of a square grid and the other side tries to
//! capture it.
//!
//! Given a position and a per-move time budget, the engine returns a single
//! legal move. Selection runs in this order:
//!
//! 1. **Immediate win**: any move that ends the game in the acting side's favour.
//! 2. **Greedy king advance** (king side only): the safe king move that gets
//!    closest to a corner, if it improves on the current corner distance.
//! 3. **Immediate capture**: the first move that removes an opponent piece.
//! 4. **Monte Carlo search**: until the budget expires, every root move is
//!    extended by its best reply according to the heuristic evaluator and then
//!    played out at random. The root move with the most won playouts is chosen.
//!
//! The search is deliberately single-ply: there is no backpropagation beyond
//! the root's children and no exploration term.
//!
//! ## Basic Usage
//!
//! ```
//! use std::time::Duration;
//! use tablut_agent::tablut::{TablutSide, TablutState};
//! use tablut_agent::{DecisionEngine, EngineConfig, GameState};
//!
//! fn main() -> Result<(), tablut_agent::AgentError> {
//!     let state = TablutState::new();
//!
//!     let config = EngineConfig::default()
//!         .with_time_budget(Duration::from_millis(20))
//!         .with_max_iterations(2)
//!         .with_seed(7);
//!
//!     let mut engine = DecisionEngine::new(config);
//!     let mv = engine.choose_move(&state, &TablutSide::Muscovite, &TablutSide::Swede)?;
//!
//!     assert!(state.legal_moves().contains(&mv));
//!     println!("{}", engine.statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Plugging in a rules engine
//!
//! The engine only consumes the [`GameState`] trait. The bundled [`tablut`]
//! module is a reference implementation; any board with a king, corners and
//! piece counts can implement the trait and reuse the engine unchanged.

pub mod config;
pub mod coord;
pub mod engine;
pub mod game_state;
pub mod heuristic;
pub mod policy;
pub mod shortcuts;
pub mod stats;
pub mod tablut;
pub mod tree;

use std::time::Duration;

pub use config::{EngineConfig, HeuristicWeights};
pub use coord::Coord;
pub use engine::DecisionEngine;
pub use game_state::{GameState, Move, Side};
pub use heuristic::Evaluator;
pub use policy::{RolloutPolicy, UniformRandomRollout};
pub use stats::{Decision, SearchStatistics};
pub use tree::SearchNode;

/// Error types for the decision engine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AgentError {
    /// The root position has no legal moves
    #[error("No legal moves available from current position")]
    NoLegalMoves,

    /// The rules engine refused a move it had reported as legal
    #[error("Illegal move: {0}")]
    IllegalMove(String),

    /// A position could not be constructed
    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Chooses a move for `acting` within `time_budget` using the default configuration.
///
/// Fails with [`AgentError::NoLegalMoves`] when `state` has no legal moves.
pub fn choose_move<S: GameState>(
    state: &S,
    acting: &S::Side,
    opponent: &S::Side,
    time_budget: Duration,
) -> Result<S::Move> {
    let config = EngineConfig::default().with_time_budget(time_budget);
    DecisionEngine::new(config).choose_move(state, acting, opponent)
}
