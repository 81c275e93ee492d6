//! Heuristic position evaluation
//!
//! The evaluator scores a position from one side's point of view using
//! material, piece proximity to the king and the king's distance to the
//! nearest corner.

use crate::{
    config::HeuristicWeights,
    game_state::{GameState, Side},
};

/// Score returned for a finished game won by the evaluating side
pub const WIN_SCORE: i64 = 10_000;

/// Score returned for a finished game won by the opponent
pub const LOSS_SCORE: i64 = 0;

/// Baseline every non-terminal score is built on
pub const BASE_SCORE: i64 = 1_000;

/// Weighted heuristic evaluator
///
/// For a non-terminal position the score is
///
/// ```text
/// 1000
///   + W_pcs  * (own pieces - opponent pieces)
///   - W_prox * sum(distance(own piece, king))
///   + W_prox * sum(distance(opponent piece, king))
///   -/+ W_king * distance_to_nearest_corner(king)
/// ```
///
/// where the corner term is subtracted for the king side and added for the
/// other side. Drawn positions are scored with the same formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    /// Weights of the individual terms
    pub weights: HeuristicWeights,
}

impl Evaluator {
    /// Creates an evaluator with the given weights
    pub fn new(weights: HeuristicWeights) -> Self {
        Evaluator { weights }
    }

    /// Scores `state` for `acting`; higher is better
    pub fn evaluate<S: GameState>(&self, state: &S, acting: &S::Side, opponent: &S::Side) -> i64 {
        if state.is_terminal() {
            match state.winner() {
                Some(ref winner) if winner == acting => return WIN_SCORE,
                Some(ref winner) if winner == opponent => return LOSS_SCORE,
                _ => {}
            }
        }

        let w = &self.weights;
        let king = state.king_coordinate();
        let mut score = BASE_SCORE;

        score += w.piece_count * state.piece_count(acting) as i64;
        score -= w.piece_count * state.piece_count(opponent) as i64;

        let own_spread: i64 = state
            .piece_coordinates(acting)
            .iter()
            .map(|p| p.distance(king) as i64)
            .sum();
        let opponent_spread: i64 = state
            .piece_coordinates(opponent)
            .iter()
            .map(|p| p.distance(king) as i64)
            .sum();
        score -= w.king_proximity * own_spread;
        score += w.king_proximity * opponent_spread;

        let corner_distance = state.distance_to_nearest_corner(king) as i64;
        if acting.controls_king() {
            score -= w.king_distance * corner_distance;
        } else {
            score += w.king_distance * corner_distance;
        }

        score
    }
}
