//! Alignment game implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Cell, Error, GameState, Result, Role, Score};

/// Score of a completed run on boards where the heuristic stays below it.
pub const WIN_SCORE: Score = 1000;

/// Heuristic value of one mark in an uncontested window.
pub const MARK_VALUE: Score = 10;

/// Window directions: across, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// One window of `alignment` consecutive cells.
type Line = SmallVec<[Cell; 8]>;

/// Place a mark on one empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlignmentAction {
    pub cell: Cell,
}

impl AlignmentAction {
    /// Create an action targeting (row, col).
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self {
            cell: Cell::new(row, col),
        }
    }
}

/// K-in-a-row state on an N×N board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentState {
    board: Board,
    alignment: usize,
    to_move: Role,
    /// Every window of `alignment` cells, precomputed from the dimensions.
    lines: Vec<Line>,
    win_score: Score,
}

impl AlignmentState {
    /// Create an empty board with `Role::Max` to move.
    pub fn new(size: usize, alignment: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::EmptyBoard);
        }
        Self::from_board(Board::new(size), alignment, Role::Max)
    }

    /// Build a position from a text diagram (`X` = Max, `O` = Min, `.` = empty).
    ///
    /// ```
    /// use rust_minimax::core::{GameState, Role};
    /// use rust_minimax::games::alignment::AlignmentState;
    ///
    /// let state = AlignmentState::parse("XXX\nOO.\n...", 3, Role::Min).unwrap();
    /// assert_eq!(state.winner(), Some(Role::Max));
    /// ```
    pub fn parse(text: &str, alignment: usize, to_move: Role) -> Result<Self> {
        Self::from_board(Board::parse(text)?, alignment, to_move)
    }

    fn from_board(board: Board, alignment: usize, to_move: Role) -> Result<Self> {
        let size = board.size();
        if alignment == 0 || alignment > size {
            return Err(Error::InvalidAlignment { size, alignment });
        }

        let lines = windows(size, alignment);
        let heuristic_bound = MARK_VALUE * alignment as Score * lines.len() as Score;
        let win_score = WIN_SCORE.max(heuristic_bound + 1);

        Ok(Self {
            board,
            alignment,
            to_move,
            lines,
            win_score,
        })
    }

    /// Get the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Run length needed to win.
    #[must_use]
    pub fn alignment(&self) -> usize {
        self.alignment
    }

    /// Magnitude returned by `evaluate()` for a won position.
    ///
    /// `WIN_SCORE` unless the board has so many windows that the heuristic
    /// could reach it, in which case it is raised just past that bound.
    #[must_use]
    pub fn win_score(&self) -> Score {
        self.win_score
    }

    /// Number of windows scored by the heuristic.
    #[must_use]
    pub fn window_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if `role` has a completed run.
    #[must_use]
    pub fn has_run(&self, role: Role) -> bool {
        self.lines
            .iter()
            .any(|line| line.iter().all(|&cell| self.board.get(cell) == Some(role)))
    }

    /// Validate and play a move for the side to move.
    pub fn play(&mut self, cell: Cell) -> Result<AlignmentAction> {
        if self.is_terminal() {
            return Err(Error::GameOver);
        }
        if !self.board.contains(cell) {
            return Err(Error::OutOfBounds(cell));
        }
        if !self.board.is_empty_at(cell) {
            return Err(Error::Occupied(cell));
        }

        let mut action = AlignmentAction { cell };
        self.apply_action(&mut action);
        Ok(action)
    }

    /// 0 if both roles hold cells in the window, else ±10 per mark.
    fn line_score(&self, line: &[Cell]) -> Score {
        let mut max_marks = 0;
        let mut min_marks = 0;
        for &cell in line {
            match self.board.get(cell) {
                Some(Role::Max) => max_marks += 1,
                Some(Role::Min) => min_marks += 1,
                None => {}
            }
        }

        if max_marks > 0 && min_marks > 0 {
            0
        } else {
            MARK_VALUE * (max_marks - min_marks)
        }
    }
}

impl GameState for AlignmentState {
    type Action = AlignmentAction;

    fn to_move(&self) -> Role {
        self.to_move
    }

    /// Center first, then the corners in reverse scan order, then the
    /// rest in scan order.
    fn legal_actions(&self) -> Vec<AlignmentAction> {
        let last = self.size() - 1;
        let middle = self.size() / 2;
        let preferred = [
            Cell::new(middle, middle),
            Cell::new(last, last),
            Cell::new(last, 0),
            Cell::new(0, last),
            Cell::new(0, 0),
        ];

        let mut actions = Vec::with_capacity(self.size() * self.size());

        for cell in preferred {
            let action = AlignmentAction { cell };
            if self.board.is_empty_at(cell) && !actions.contains(&action) {
                actions.push(action);
            }
        }

        actions.extend(
            self.board
                .cells()
                .filter(|(cell, mark)| mark.is_none() && !preferred.contains(cell))
                .map(|(cell, _)| AlignmentAction { cell }),
        );

        actions
    }

    fn apply_action(&mut self, action: &mut AlignmentAction) {
        let previous = self.board.set(action.cell, Some(self.to_move));
        debug_assert!(previous.is_none(), "cell {} was already marked", action.cell);
        self.to_move = self.to_move.opponent();
    }

    fn undo_action(&mut self, action: &AlignmentAction) {
        self.board.set(action.cell, None);
        self.to_move = self.to_move.opponent();
    }

    fn evaluate(&self) -> Score {
        match self.winner() {
            Some(role) => role.sign() * self.win_score,
            None => self.lines.iter().map(|line| self.line_score(line)).sum(),
        }
    }

    /// `Max` is checked first if both roles somehow hold a run.
    fn winner(&self) -> Option<Role> {
        Role::ALL.into_iter().find(|&role| self.has_run(role))
    }

    fn is_terminal(&self) -> bool {
        self.board.is_full() || self.winner().is_some()
    }
}

impl std::fmt::Display for AlignmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// Every window of `alignment` cells along rows, columns and both diagonals.
fn windows(size: usize, alignment: usize) -> Vec<Line> {
    let span = alignment as isize - 1;
    let limit = size as isize;
    let mut lines = Vec::new();

    for row in 0..limit {
        for col in 0..limit {
            for (dr, dc) in DIRECTIONS {
                let (end_row, end_col) = (row + dr * span, col + dc * span);
                if !(0..limit).contains(&end_row) || !(0..limit).contains(&end_col) {
                    continue;
                }
                lines.push(
                    (0..alignment as isize)
                        .map(|k| Cell::new((row + dr * k) as usize, (col + dc * k) as usize))
                        .collect(),
                );
            }
        }
    }

    lines
}
