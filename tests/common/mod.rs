#![allow(dead_code)]

use std::collections::HashSet;

use tablut_agent::{AgentError, Coord, GameState, Move, Side};

/// Sides of the stub game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StubSide {
    Attacker,
    Defender,
}

impl Side for StubSide {
    fn controls_king(&self) -> bool {
        *self == StubSide::Defender
    }
}

/// A scripted stub move
///
/// A move without replies ends the game with `outcome`. A move with replies
/// leads to an open position where exactly those replies are legal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StubMove {
    pub id: usize,
    pub to: Coord,
    pub outcome: Option<StubSide>,
    pub replies: Vec<StubMove>,
}

impl StubMove {
    pub fn ending(id: usize, outcome: Option<StubSide>) -> Self {
        StubMove {
            id,
            to: Coord::new(id % 9, id / 9),
            outcome,
            replies: Vec::new(),
        }
    }

    pub fn leading_to(id: usize, replies: Vec<StubMove>) -> Self {
        StubMove {
            replies,
            ..StubMove::ending(id, None)
        }
    }
}

impl Move for StubMove {
    fn destination(&self) -> Coord {
        self.to
    }
}

/// A hand-built position on a 9x9 board
///
/// Moves either end the game at once or open a second ply of scripted
/// replies, which makes it easy to script shortcut, search and error
/// scenarios.
#[derive(Clone, Debug)]
pub struct StubState {
    pub terminal: bool,
    pub winner: Option<StubSide>,
    pub king: Coord,
    pub attackers: Vec<Coord>,
    pub defenders: Vec<Coord>,
    pub moves: Vec<StubMove>,
    pub fail_apply: bool,
}

impl StubState {
    pub fn new(king: Coord) -> Self {
        StubState {
            terminal: false,
            winner: None,
            king,
            attackers: Vec::new(),
            defenders: vec![king],
            moves: Vec::new(),
            fail_apply: false,
        }
    }

    pub fn with_move(mut self, id: usize, outcome: Option<StubSide>) -> Self {
        self.moves.push(StubMove::ending(id, outcome));
        self
    }

    pub fn with_reply_move(mut self, id: usize, replies: Vec<StubMove>) -> Self {
        self.moves.push(StubMove::leading_to(id, replies));
        self
    }

    fn pieces(&self, side: &StubSide) -> &[Coord] {
        match side {
            StubSide::Attacker => &self.attackers,
            StubSide::Defender => &self.defenders,
        }
    }
}

impl GameState for StubState {
    type Move = StubMove;
    type Side = StubSide;

    fn legal_moves(&self) -> Vec<StubMove> {
        if self.terminal {
            return Vec::new();
        }
        self.moves.clone()
    }

    fn legal_moves_for_piece(&self, _at: Coord) -> Vec<StubMove> {
        Vec::new()
    }

    fn apply_move(&self, mv: &StubMove) -> tablut_agent::Result<Self> {
        if self.fail_apply {
            return Err(AgentError::IllegalMove(format!("stub refuses move {}", mv.id)));
        }
        let mut next = self.clone();
        next.terminal = mv.replies.is_empty();
        next.winner = mv.outcome;
        next.moves = mv.replies.clone();
        Ok(next)
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn winner(&self) -> Option<StubSide> {
        self.winner
    }

    fn piece_count(&self, side: &StubSide) -> usize {
        self.pieces(side).len()
    }

    fn king_coordinate(&self) -> Coord {
        self.king
    }

    fn piece_coordinates(&self, side: &StubSide) -> HashSet<Coord> {
        self.pieces(side).iter().copied().collect()
    }

    fn distance_to_nearest_corner(&self, at: Coord) -> u32 {
        [(0, 0), (0, 8), (8, 0), (8, 8)]
            .iter()
            .map(|&(r, c)| at.distance(Coord::new(r, c)))
            .min()
            .unwrap_or(0)
    }
}
