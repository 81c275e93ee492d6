//! Search tree nodes
//!
//! The tree is rebuilt from scratch for every decision and dropped when the
//! decision returns. Each node owns its children directly, so no arena or
//! parent pointers are needed.

use crate::{game_state::GameState, Result};

/// A position reached from the root by zero or more moves
///
/// Children are created lazily by [`SearchNode::expand`], one per legal move,
/// in the order the rules engine enumerates them.
pub struct SearchNode<S: GameState> {
    /// The position at this node
    pub state: S,

    /// The move that led to this position (None for root)
    pub mv: Option<S::Move>,

    /// Children nodes, empty until the node is expanded
    pub children: Vec<SearchNode<S>>,

    /// Number of won playouts credited to this node
    pub win_count: u64,
}

impl<S: GameState> SearchNode<S> {
    /// Creates the root node for `state`
    pub fn root(state: S) -> Self {
        SearchNode {
            state,
            mv: None,
            children: Vec::new(),
            win_count: 0,
        }
    }

    /// Creates a node for the position reached by `mv`
    pub fn new(state: S, mv: S::Move) -> Self {
        SearchNode {
            state,
            mv: Some(mv),
            children: Vec::new(),
            win_count: 0,
        }
    }

    /// Returns true if the node has children
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Creates one child per legal move
    ///
    /// Does nothing if the node already has children. A terminal position has
    /// no legal moves and therefore stays childless.
    ///
    /// # Errors
    ///
    /// Propagates the rules engine's error if a reported legal move cannot be
    /// applied.
    pub fn expand(&mut self) -> Result<()> {
        if self.is_expanded() {
            return Ok(());
        }

        let moves = self.state.legal_moves();
        let mut children = Vec::with_capacity(moves.len());
        for mv in moves {
            let next_state = self.state.apply_move(&mv)?;
            children.push(SearchNode::new(next_state, mv));
        }

        self.children = children;
        Ok(())
    }
}
