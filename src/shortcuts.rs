//! Tactical shortcuts checked before the Monte Carlo search
//!
//! Each function inspects the root position (or its already expanded
//! children) and returns a move when a cheap, exact rule applies.

use log::trace;

use crate::{
    game_state::{GameState, Move, Side},
    tree::SearchNode,
    Result,
};

/// Returns the first root move whose resulting position is won by `acting`
pub fn find_winning_move<S: GameState>(
    children: &[SearchNode<S>],
    acting: &S::Side,
) -> Option<S::Move> {
    children
        .iter()
        .find(|child| child.state.is_terminal() && child.state.winner().as_ref() == Some(acting))
        .and_then(|child| child.mv.clone())
}

/// Returns the safe king move that lands closest to a corner
///
/// Only king moves that strictly reduce the king's current corner distance are
/// considered. A move is safe if no reply by the opponent changes the acting
/// side's piece count. Among safe candidates the smallest resulting distance
/// wins; ties keep the first move found. Returns `None` for the side without
/// the king.
///
/// # Errors
///
/// Propagates rules engine errors raised while applying candidate moves.
pub fn find_greedy_king_move<S: GameState>(
    state: &S,
    acting: &S::Side,
) -> Result<Option<S::Move>> {
    if !acting.controls_king() {
        return Ok(None);
    }

    let king = state.king_coordinate();
    let mut best_distance = state.distance_to_nearest_corner(king);
    let mut best_move = None;

    for mv in state.legal_moves_for_piece(king) {
        let distance = state.distance_to_nearest_corner(mv.destination());
        if distance >= best_distance {
            continue;
        }
        let next_state = state.apply_move(&mv)?;
        if is_safe(&next_state, acting)? {
            trace!("safe king move {:?} reaches corner distance {}", mv, distance);
            best_distance = distance;
            best_move = Some(mv);
        }
    }

    Ok(best_move)
}

/// Returns true if no reply from `state` costs `acting` a piece
fn is_safe<S: GameState>(state: &S, acting: &S::Side) -> Result<bool> {
    let pieces = state.piece_count(acting);
    for reply in state.legal_moves() {
        if state.apply_move(&reply)?.piece_count(acting) != pieces {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Returns the first root move that removes at least one opponent piece
pub fn find_capturing_move<S: GameState>(
    root: &S,
    children: &[SearchNode<S>],
    opponent: &S::Side,
) -> Option<S::Move> {
    let before = root.piece_count(opponent);
    children
        .iter()
        .find(|child| child.state.piece_count(opponent) < before)
        .and_then(|child| child.mv.clone())
}
