//! Policies for the phases of the search loop
//!
//! This module contains the pieces the search loop is assembled from:
//! - Rollout policies: how a position is played out to the end of the game
//! - Selection: how the reply a playout starts from is chosen, and how the
//!   final root move is picked

pub mod rollout;
pub mod selection;

pub use rollout::{RolloutPolicy, UniformRandomRollout};
pub use selection::{best_reply, most_wins};
