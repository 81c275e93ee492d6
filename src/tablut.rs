//! Reference Tablut rules
//!
//! Game: Tablut on a 9x9 board.
//! - Muscovites (16 attackers) move first; Swedes (8 defenders and the king)
//!   try to bring the king to a corner.
//! - Every piece moves like a rook and cannot jump. Only the king may stop on
//!   the throne or a corner, and no other piece may pass through the throne.
//! - A piece other than the king is captured when the opponent moves to trap
//!   it against a hostile square: an opposing piece, a corner, or the throne.
//!   The throne is always hostile to Muscovites and hostile to Swedes while
//!   it is empty. The king takes part in captures.
//! - On the throne the king must be surrounded on all four sides. Next to the
//!   throne it must be surrounded on the remaining three sides. Anywhere else
//!   it is captured like any other piece, with two Muscovites (or a Muscovite
//!   and a corner) on opposite sides.
//! - A side with no legal move on its turn loses. A game reaching the ply
//!   limit without a winner is drawn.

use std::collections::HashSet;
use std::fmt;

use crate::{
    coord::Coord,
    game_state::{GameState, Move, Side},
    AgentError, Result,
};

/// Width and height of the board
pub const BOARD_SIZE: usize = 9;

/// Ply limit after which an undecided game is drawn
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// Centre square the king starts on
pub const THRONE: Coord = Coord::new(4, 4);

/// The four escape squares
pub const CORNERS: [Coord; 4] = [
    Coord::new(0, 0),
    Coord::new(0, BOARD_SIZE - 1),
    Coord::new(BOARD_SIZE - 1, 0),
    Coord::new(BOARD_SIZE - 1, BOARD_SIZE - 1),
];

const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const OPENING: [&str; BOARD_SIZE] = [
    "...MMM...",
    "....M....",
    "....S....",
    "M...S...M",
    "MMSSKSSMM",
    "M...S...M",
    "....S....",
    "....M....",
    "...MMM...",
];

/// The two sides of a Tablut game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TablutSide {
    /// Attackers, trying to capture the king
    Muscovite,
    /// Defenders, escorting the king to a corner
    Swede,
}

impl TablutSide {
    /// Returns the other side
    pub fn opponent(self) -> Self {
        match self {
            TablutSide::Muscovite => TablutSide::Swede,
            TablutSide::Swede => TablutSide::Muscovite,
        }
    }
}

impl Side for TablutSide {
    fn controls_king(&self) -> bool {
        *self == TablutSide::Swede
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    /// An attacking soldier
    Muscovite,

    /// A defending soldier
    Swede,

    /// The Swedish king
    King,
}

impl Piece {
    /// Returns the side owning this piece
    pub fn side(self) -> TablutSide {
        match self {
            Piece::Muscovite => TablutSide::Muscovite,
            Piece::Swede | Piece::King => TablutSide::Swede,
        }
    }

    fn symbol(self) -> char {
        match self {
            Piece::Muscovite => 'M',
            Piece::Swede => 'S',
            Piece::King => 'K',
        }
    }
}

/// A move of one piece from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TablutMove {
    /// Square the piece leaves
    pub from: Coord,

    /// Square the piece lands on
    pub to: Coord,
}

impl TablutMove {
    /// Creates a move from `from` to `to` without checking legality
    pub fn new(from: Coord, to: Coord) -> Self {
        TablutMove { from, to }
    }
}

impl Move for TablutMove {
    fn destination(&self) -> Coord {
        self.to
    }
}

impl fmt::Display for TablutMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A Tablut position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablutState {
    board: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    to_move: TablutSide,
    king: Coord,
    ply: u32,
    max_plies: u32,
    winner: Option<TablutSide>,
    finished: bool,
}

impl TablutState {
    /// Creates the standard opening position, Muscovites to move
    pub fn new() -> Self {
        let mut board = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in OPENING.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                board[row][col] = match symbol {
                    'M' => Some(Piece::Muscovite),
                    'S' => Some(Piece::Swede),
                    'K' => Some(Piece::King),
                    _ => None,
                };
            }
        }

        TablutState {
            board,
            to_move: TablutSide::Muscovite,
            king: THRONE,
            ply: 0,
            max_plies: DEFAULT_MAX_PLIES,
            winner: None,
            finished: false,
        }
    }

    /// Parses a position from nine rows of nine symbols
    ///
    /// `.` is an empty square, `M` a Muscovite, `S` a Swede and `K` the king.
    /// Whitespace inside a row is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidPosition`] for malformed diagrams or a
    /// king count other than one.
    pub fn from_rows(rows: &[&str], to_move: TablutSide) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(AgentError::InvalidPosition(format!(
                "expected {} rows, got {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = [[None; BOARD_SIZE]; BOARD_SIZE];
        let mut kings = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(AgentError::InvalidPosition(format!(
                    "row {} has {} squares, expected {}",
                    row,
                    symbols.len(),
                    BOARD_SIZE
                )));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board[row][col] = match symbol {
                    '.' => None,
                    'M' => Some(Piece::Muscovite),
                    'S' => Some(Piece::Swede),
                    'K' => {
                        kings.push(Coord::new(row, col));
                        Some(Piece::King)
                    }
                    other => {
                        return Err(AgentError::InvalidPosition(format!(
                            "unknown symbol '{}' at ({}, {})",
                            other, row, col
                        )))
                    }
                };
            }
        }

        let king = match kings.as_slice() {
            [king] => *king,
            _ => {
                return Err(AgentError::InvalidPosition(format!(
                    "expected exactly one king, found {}",
                    kings.len()
                )))
            }
        };

        let mut state = TablutState {
            board,
            to_move,
            king,
            ply: 0,
            max_plies: DEFAULT_MAX_PLIES,
            winner: None,
            finished: false,
        };
        state.refresh_outcome();
        Ok(state)
    }

    /// Sets the ply limit after which the game is drawn
    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self.refresh_outcome();
        self
    }

    /// Returns the side to move
    pub fn to_move(&self) -> TablutSide {
        self.to_move
    }

    /// Returns the number of moves played since this position was created
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Returns the piece on `at`, if any
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        self.board[at.row][at.col]
    }

    fn set(&mut self, at: Coord, piece: Option<Piece>) {
        self.board[at.row][at.col] = piece;
    }

    fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.board.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .filter_map(move |(col, square)| square.map(|piece| (Coord::new(row, col), piece)))
        })
    }

    fn is_hostile_to(&self, at: Coord, victim: TablutSide) -> bool {
        match self.piece_at(at) {
            Some(piece) => piece.side() != victim,
            None => at == THRONE || CORNERS.contains(&at),
        }
    }

    /// Whether the king on `at` is captured by a Muscovite arriving from the
    /// direction opposite to `(d_row, d_col)`
    fn is_king_captured(&self, at: Coord, d_row: isize, d_col: isize) -> bool {
        if at.distance(THRONE) <= 1 {
            return DIRECTIONS.iter().all(|&(r, c)| match at.offset(r, c, BOARD_SIZE) {
                Some(n) => n == THRONE || self.piece_at(n) == Some(Piece::Muscovite),
                None => false,
            });
        }

        match at.offset(d_row, d_col, BOARD_SIZE) {
            Some(far) => self.piece_at(far) == Some(Piece::Muscovite) || CORNERS.contains(&far),
            None => false,
        }
    }

    fn resolve_captures(&mut self, to: Coord, mover: TablutSide) {
        for (d_row, d_col) in DIRECTIONS {
            let Some(victim_at) = to.offset(d_row, d_col, BOARD_SIZE) else {
                continue;
            };
            let Some(victim) = self.piece_at(victim_at) else {
                continue;
            };
            if victim.side() == mover {
                continue;
            }

            if victim == Piece::King {
                if self.is_king_captured(victim_at, d_row, d_col) {
                    self.set(victim_at, None);
                    self.winner = Some(TablutSide::Muscovite);
                }
                continue;
            }

            if let Some(anvil) = victim_at.offset(d_row, d_col, BOARD_SIZE) {
                if self.is_hostile_to(anvil, victim.side()) {
                    self.set(victim_at, None);
                }
            }
        }
    }

    fn has_legal_move(&self) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.side() == self.to_move)
            .any(|(at, _)| !self.moves_from(at).is_empty())
    }

    fn refresh_outcome(&mut self) {
        self.finished = false;
        if self.winner.is_none() && CORNERS.contains(&self.king) {
            self.winner = Some(TablutSide::Swede);
        }
        if self.winner.is_none() && !self.has_legal_move() {
            self.winner = Some(self.to_move.opponent());
        }
        self.finished = self.winner.is_some() || self.ply >= self.max_plies;
    }

    /// Moves of the piece on `at`, ignoring whose turn it is
    fn moves_from(&self, at: Coord) -> Vec<TablutMove> {
        let Some(piece) = self.piece_at(at) else {
            return Vec::new();
        };

        let mut moves = Vec::new();
        for (d_row, d_col) in DIRECTIONS {
            let mut current = at;
            while let Some(next) = current.offset(d_row, d_col, BOARD_SIZE) {
                if self.piece_at(next).is_some() {
                    break;
                }
                if piece != Piece::King && (next == THRONE || CORNERS.contains(&next)) {
                    break;
                }
                moves.push(TablutMove::new(at, next));
                current = next;
            }
        }
        moves
    }
}

impl Default for TablutState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState for TablutState {
    type Move = TablutMove;
    type Side = TablutSide;

    fn legal_moves(&self) -> Vec<Self::Move> {
        if self.finished {
            return Vec::new();
        }
        self.pieces()
            .filter(|(_, piece)| piece.side() == self.to_move)
            .flat_map(|(at, _)| self.moves_from(at))
            .collect()
    }

    fn legal_moves_for_piece(&self, at: Coord) -> Vec<Self::Move> {
        if self.finished {
            return Vec::new();
        }
        match self.piece_at(at) {
            Some(piece) if piece.side() == self.to_move => self.moves_from(at),
            _ => Vec::new(),
        }
    }

    fn apply_move(&self, mv: &Self::Move) -> Result<Self> {
        if !self.legal_moves_for_piece(mv.from).contains(mv) {
            return Err(AgentError::IllegalMove(format!(
                "{} is not legal for {:?} at ply {}",
                mv, self.to_move, self.ply
            )));
        }

        let mut next = self.clone();
        let piece = next.piece_at(mv.from);
        next.set(mv.from, None);
        next.set(mv.to, piece);
        if piece == Some(Piece::King) {
            next.king = mv.to;
        }

        next.resolve_captures(mv.to, self.to_move);
        next.ply += 1;
        next.to_move = self.to_move.opponent();
        next.refresh_outcome();
        Ok(next)
    }

    fn is_terminal(&self) -> bool {
        self.finished
    }

    fn winner(&self) -> Option<Self::Side> {
        self.winner
    }

    fn piece_count(&self, side: &Self::Side) -> usize {
        self.pieces().filter(|(_, piece)| piece.side() == *side).count()
    }

    fn king_coordinate(&self) -> Coord {
        self.king
    }

    fn piece_coordinates(&self, side: &Self::Side) -> HashSet<Coord> {
        self.pieces()
            .filter(|(_, piece)| piece.side() == *side)
            .map(|(at, _)| at)
            .collect()
    }

    fn distance_to_nearest_corner(&self, at: Coord) -> u32 {
        CORNERS.iter().map(|corner| corner.distance(at)).min().unwrap_or(0)
    }
}

impl fmt::Display for TablutState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7 8")?;
        for (row, line) in self.board.iter().enumerate() {
            write!(f, "{}", row)?;
            for square in line {
                write!(f, " {}", square.map_or('.', Piece::symbol))?;
            }
            writeln!(f)?;
        }
        write!(f, "{:?} to move, ply {}", self.to_move, self.ply)
    }
}
