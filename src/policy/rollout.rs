//! Rollout policies
//!
//! A rollout plays a position forward until the game is over. The random
//! number generator is always passed in by the caller, so a seeded generator
//! makes every playout reproducible.

use rand::{seq::SliceRandom, Rng};

use crate::{game_state::GameState, Result};

/// Outcome of a single rollout
#[derive(Debug, Clone)]
pub struct Playout<S: GameState> {
    /// The position the rollout stopped in
    pub final_state: S,

    /// Number of moves played
    pub plies: usize,
}

/// Trait for policies that play a position out to the end of the game
pub trait RolloutPolicy<S: GameState>: Send + Sync {
    /// Plays `state` forward until it is terminal
    ///
    /// # Errors
    ///
    /// Propagates rules engine errors raised while applying moves.
    fn play_out<R: Rng + ?Sized>(&self, state: &S, rng: &mut R) -> Result<Playout<S>>;
}

/// Uniformly random rollout policy
///
/// Every step picks one of the legal moves with equal probability. A position
/// that is already terminal is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformRandomRollout;

impl UniformRandomRollout {
    /// Creates a new uniform rollout policy
    pub fn new() -> Self {
        UniformRandomRollout
    }
}

impl<S: GameState> RolloutPolicy<S> for UniformRandomRollout {
    fn play_out<R: Rng + ?Sized>(&self, state: &S, rng: &mut R) -> Result<Playout<S>> {
        let mut current = state.clone();
        let mut plies = 0;

        while !current.is_terminal() {
            let moves = current.legal_moves();
            let Some(mv) = moves.choose(rng) else {
                break;
            };
            current = current.apply_move(mv)?;
            plies += 1;
        }

        Ok(Playout {
            final_state: current,
            plies,
        })
    }
}
