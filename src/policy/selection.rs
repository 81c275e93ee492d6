//! Selection rules used by the search loop
//!
//! Two choices are made from a list of sibling nodes: which reply a playout
//! starts from (best heuristic score) and which root move is finally played
//! (most won playouts). Both keep the first node on ties.

use crate::{game_state::GameState, heuristic::Evaluator, tree::SearchNode, AgentError, Result};

/// Returns the index of the child with the strictly highest heuristic score
/// for `acting`, or `None` if there are no children
pub fn best_reply<S: GameState>(
    children: &[SearchNode<S>],
    evaluator: &Evaluator,
    acting: &S::Side,
    opponent: &S::Side,
) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;

    for (i, child) in children.iter().enumerate() {
        let score = evaluator.evaluate(&child.state, acting, opponent);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((i, score)),
        }
    }

    best.map(|(i, _)| i)
}

/// Returns the move of the child with the most wins
///
/// # Errors
///
/// Returns [`AgentError::NoLegalMoves`] if `children` is empty.
pub fn most_wins<S: GameState>(children: &[SearchNode<S>]) -> Result<S::Move> {
    let mut best_wins = 0;
    let mut best_index = None;

    for (i, child) in children.iter().enumerate() {
        if best_index.is_none() || child.win_count > best_wins {
            best_wins = child.win_count;
            best_index = Some(i);
        }
    }

    best_index
        .and_then(|i| children[i].mv.clone())
        .ok_or(AgentError::NoLegalMoves)
}
