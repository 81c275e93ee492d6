//! Traits defining the rules engine the decision engine plays against.
//!
//! The GameState trait is the only boundary between the engine and a concrete
//! board. Implementors supply move generation, move application, terminal
//! detection and the few board queries the heuristic and shortcuts need.

use std::collections::HashSet;
use std::fmt::Debug;

use crate::{coord::Coord, Result};

/// Trait for moves that can be played on the board
///
/// The engine compares moves by equality and only ever reads their
/// destination square.
pub trait Move: Clone + Debug + PartialEq + Send + Sync {
    /// Returns the square this move lands on
    fn destination(&self) -> Coord;
}

/// Trait for the two sides of the game
pub trait Side: Clone + Debug + PartialEq + Send + Sync {
    /// Returns true for the side trying to bring the king to a corner
    fn controls_king(&self) -> bool;
}

/// Trait defining the position interface required by the engine
///
/// Positions are treated as immutable values: every transition goes through
/// [`GameState::apply_move`], which returns a new position and leaves `self`
/// untouched. Cloning is the standard [`Clone`] implementation.
pub trait GameState: Clone + Send + Sync {
    /// The type of moves that can be played in this game
    type Move: Move;

    /// The type of sides in this game
    type Side: Side;

    /// Returns every legal move for the side to move
    ///
    /// Terminal positions must return an empty list. The enumeration order is
    /// used for tie-breaking, so it should be deterministic.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Returns the legal moves of the piece standing on `at`
    ///
    /// Empty if the square is empty or holds a piece of the side not to move.
    fn legal_moves_for_piece(&self, at: Coord) -> Vec<Self::Move>;

    /// Applies a move and returns the resulting position
    ///
    /// # Errors
    ///
    /// Returns [`crate::AgentError::IllegalMove`] if the move cannot be applied.
    fn apply_move(&self, mv: &Self::Move) -> Result<Self>;

    /// Returns true if the game is over
    fn is_terminal(&self) -> bool;

    /// Returns the winning side, or `None` while the game is running or drawn
    fn winner(&self) -> Option<Self::Side>;

    /// Returns the number of pieces `side` has on the board, king included
    fn piece_count(&self, side: &Self::Side) -> usize;

    /// Returns the king's square
    ///
    /// After a king capture this is the square it was captured on.
    fn king_coordinate(&self) -> Coord;

    /// Returns the squares occupied by `side`
    fn piece_coordinates(&self, side: &Self::Side) -> HashSet<Coord>;

    /// Returns the distance from `at` to the closest corner of the board
    fn distance_to_nearest_corner(&self, at: Coord) -> u32;
}
