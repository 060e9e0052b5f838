//! Capture-race game implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Error, GameState, Result, Role, Score};

use super::eval;

/// Side length of the race board.
pub const BOARD_SIZE: usize = 8;

/// Rows each role fills at the start.
const STARTING_ROWS: usize = 2;

/// Move one piece one row forward.
///
/// `captured` is the memento written by `apply_action`: whatever stood on
/// `to` before the move. It does not take part in equality.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RaceAction {
    pub from: Cell,
    pub to: Cell,
    pub captured: Option<Role>,
}

impl RaceAction {
    /// Create an action with an empty memento.
    #[must_use]
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }
}

impl PartialEq for RaceAction {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for RaceAction {}

impl std::hash::Hash for RaceAction {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl std::fmt::Display for RaceAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Capture-race state on an 8×8 board.
///
/// `Role::Max` pieces advance toward row 0, `Role::Min` pieces toward
/// row 7. A piece steps straight ahead onto an empty cell, or diagonally
/// ahead onto an empty cell or an opposing piece, capturing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaceState {
    board: Board,
    to_move: Role,
}

impl Default for RaceState {
    fn default() -> Self {
        Self::new()
    }
}

impl RaceState {
    /// Starting layout: `Min` fills rows 0-1, `Max` fills rows 6-7, `Max`
    /// moves first.
    pub fn new() -> Self {
        let mut board = Board::new(BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            for row in 0..STARTING_ROWS {
                board.set(Cell::new(row, col), Some(Role::Min));
                board.set(Cell::new(BOARD_SIZE - 1 - row, col), Some(Role::Max));
            }
        }

        Self {
            board,
            to_move: Role::Max,
        }
    }

    /// Build a position from an 8-row text diagram (`X` = Max, `O` = Min).
    pub fn parse(text: &str, to_move: Role) -> Result<Self> {
        let board = Board::parse(text)?;
        if board.size() != BOARD_SIZE {
            return Err(Error::WrongSize {
                expected: BOARD_SIZE,
                found: board.size(),
            });
        }
        Ok(Self { board, to_move })
    }

    /// Get the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Row a role must reach to win.
    #[must_use]
    pub const fn goal_row(role: Role) -> usize {
        match role {
            Role::Max => 0,
            Role::Min => BOARD_SIZE - 1,
        }
    }

    /// Row one step ahead of `row` for `role`, if still on the board.
    #[must_use]
    pub fn row_ahead(row: usize, role: Role) -> Option<usize> {
        match role {
            Role::Max => row.checked_sub(1),
            Role::Min => (row + 1 < BOARD_SIZE).then_some(row + 1),
        }
    }

    /// Row one step behind `row` for `role`, if still on the board.
    #[must_use]
    pub fn row_behind(row: usize, role: Role) -> Option<usize> {
        Self::row_ahead(row, role.opponent())
    }

    /// Legal destinations of the piece on `from`: straight, then left and
    /// right diagonals. Empty if `from` is off the board or holds no piece.
    #[must_use]
    pub fn destinations(&self, from: Cell) -> SmallVec<[Cell; 3]> {
        let mut out = SmallVec::new();

        if !self.board.contains(from) {
            return out;
        }
        let Some(role) = self.board.get(from) else {
            return out;
        };
        let Some(row) = Self::row_ahead(from.row, role) else {
            return out;
        };

        let ahead = Cell::new(row, from.col);
        if self.board.is_empty_at(ahead) {
            out.push(ahead);
        }

        for col in [from.col.checked_sub(1), Some(from.col + 1)].into_iter().flatten() {
            let diagonal = Cell::new(row, col);
            if self.board.contains(diagonal) && self.board.get(diagonal) != Some(role) {
                out.push(diagonal);
            }
        }

        out
    }

    /// Check whether any piece of `role` can move.
    #[must_use]
    pub fn has_moves(&self, role: Role) -> bool {
        self.board
            .pieces(role)
            .any(|cell| !self.destinations(cell).is_empty())
    }

    /// Validate and play a move for the side to move.
    pub fn play(&mut self, from: Cell, to: Cell) -> Result<RaceAction> {
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        for cell in [from, to] {
            if !self.board.contains(cell) {
                return Err(Error::OutOfBounds(cell));
            }
        }
        if self.board.get(from) != Some(self.to_move) || !self.destinations(from).contains(&to) {
            return Err(Error::IllegalMove {
                role: self.to_move,
                from,
                to,
            });
        }

        let mut action = RaceAction::new(from, to);
        self.apply_action(&mut action);
        Ok(action)
    }
}

impl GameState for RaceState {
    type Action = RaceAction;

    fn to_move(&self) -> Role {
        self.to_move
    }

    /// Captures first, then quiet moves; each group in scan order.
    fn legal_actions(&self) -> Vec<RaceAction> {
        let mut captures = Vec::new();
        let mut quiet = Vec::new();

        for from in self.board.pieces(self.to_move) {
            for to in self.destinations(from) {
                let action = RaceAction::new(from, to);
                if self.board.is_empty_at(to) {
                    quiet.push(action);
                } else {
                    captures.push(action);
                }
            }
        }

        captures.append(&mut quiet);
        captures
    }

    fn apply_action(&mut self, action: &mut RaceAction) {
        let piece = self.board.set(action.from, None);
        debug_assert_eq!(piece, Some(self.to_move), "no {} piece on {}", self.to_move, action.from);
        action.captured = self.board.set(action.to, piece);
        self.to_move = self.to_move.opponent();
    }

    fn undo_action(&mut self, action: &RaceAction) {
        let piece = self.board.set(action.to, action.captured);
        self.board.set(action.from, piece);
        self.to_move = self.to_move.opponent();
    }

    fn evaluate(&self) -> Score {
        eval::evaluate(self)
    }

    /// A `Max` piece on row 0 is checked before a `Min` piece on row 7.
    fn winner(&self) -> Option<Role> {
        Role::ALL.into_iter().find(|&role| {
            self.board
                .row(Self::goal_row(role))
                .iter()
                .any(|&mark| mark == Some(role))
        })
    }

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.has_moves(self.to_move)
    }
}

impl std::fmt::Display for RaceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
