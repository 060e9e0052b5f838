//! Square grid of cell marks shared by both games.
//!
//! Cells are stored row-major. Each cell is empty (`None`) or holds the
//! mark of one role. Boards render to and parse from text diagrams:
//!
//! ```text
//! X.O
//! .X.
//! O..
//! ```
//!
//! `X` is `Role::Max`, `O` is `Role::Min`, `.` is empty. Whitespace inside
//! a row and blank lines are ignored.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::player::Role;

/// A (row, col) coordinate. Row 0 is the top of a diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed-size square grid of marks.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Role>>,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "Board size must be positive");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Parse a text diagram.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        if size == 0 {
            return Err(Error::EmptyBoard);
        }

        let mut board = Board::new(size);
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != size {
                return Err(Error::RaggedRow {
                    row,
                    found: glyphs.len(),
                    expected: size,
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                let cell = Cell::new(row, col);
                let mark = match glyph {
                    '.' => None,
                    other => Some(
                        Role::from_glyph(other).ok_or(Error::UnknownGlyph { glyph, cell })?,
                    ),
                };
                board.set(cell, mark);
            }
        }

        Ok(board)
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a cell lies on the board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Mark at a cell. Panics if the cell is off the board.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Role> {
        self.cells[self.offset(cell)]
    }

    /// Overwrite a cell, returning the previous mark.
    pub fn set(&mut self, cell: Cell, mark: Option<Role>) -> Option<Role> {
        let offset = self.offset(cell);
        std::mem::replace(&mut self.cells[offset], mark)
    }

    /// Check whether a cell is empty.
    #[must_use]
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Check whether every cell is marked.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Iterate over all cells in scan order (row by row, left to right).
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Option<Role>)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &mark)| (Cell::new(i / size, i % size), mark))
    }

    /// Iterate over the cells holding `role`'s mark, in scan order.
    pub fn pieces(&self, role: Role) -> impl Iterator<Item = Cell> + '_ {
        self.cells()
            .filter(move |&(_, mark)| mark == Some(role))
            .map(|(cell, _)| cell)
    }

    /// Number of cells holding `role`'s mark.
    #[must_use]
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|&&mark| mark == Some(role)).count()
    }

    /// Marks of one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Option<Role>] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    fn offset(&self, cell: Cell) -> usize {
        assert!(self.contains(cell), "cell {} is off the board", cell);
        cell.row * self.size + cell.col
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line: String = self
                .row(row)
                .iter()
                .map(|mark| mark.map_or('.', Role::glyph))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
