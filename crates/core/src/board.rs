//! Board module - the game grid
//!
//! The board is a 20x10 grid where each cell is empty or occupied.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom) and col
//! ranges 0..9 (left to right).
//!
//! The board is always owned by the caller and handed to the queries in
//! [`crate::collision`] explicitly; there is no shared board.

use std::fmt;

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::GridError;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= HEIGHT as i32 || col < 0 || col >= WIDTH as i32 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    /// Number of rows as a signed row coordinate
    pub fn rows(&self) -> i32 {
        HEIGHT as i32
    }

    /// Number of columns as a signed column coordinate
    pub fn cols(&self) -> i32 {
        WIDTH as i32
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Cell::Occupied))
    }

    /// Check if a piece cell may sit at (row, col)
    ///
    /// Rows above the board are open space, so a cell there is free as long
    /// as its column is on the board. Columns off the board and rows at or
    /// below the floor are never free.
    pub fn is_free(&self, row: i32, col: i32) -> bool {
        if col < 0 || col >= WIDTH as i32 || row >= HEIGHT as i32 {
            return false;
        }
        row < 0 || !self.is_occupied(row, col)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= HEIGHT {
            return false;
        }
        let start = row * WIDTH;
        self.cells[start..start + WIDTH]
            .iter()
            .all(|cell| cell.is_occupied())
    }

    /// Which of `rows` are full, ascending and without duplicates
    ///
    /// Meant for the rows a just-committed piece touches, so at most four
    /// rows are reported; rows outside the board are ignored.
    pub fn completed_rows(&self, rows: impl IntoIterator<Item = i32>) -> ArrayVec<usize, 4> {
        let mut completed: ArrayVec<usize, 4> = ArrayVec::new();
        for row in rows {
            if row < 0 || completed.is_full() {
                continue;
            }
            let row = row as usize;
            if !completed.contains(&row) && self.is_row_full(row) {
                completed.push(row);
            }
        }
        completed.sort_unstable();
        completed
    }

    /// Remove the given rows; everything above each of them drops down
    ///
    /// Other rows stay, full or not. Indices outside the board are ignored.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        self.collapse(|row| rows.contains(&row));
        debug!(?rows, "cleared rows");
    }

    /// Clear all full rows and return the row indices that were cleared
    /// (sorted top to bottom). Everything above a cleared row drops down.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, HEIGHT> {
        let cleared_rows: ArrayVec<usize, HEIGHT> =
            (0..HEIGHT).filter(|&row| self.is_row_full(row)).collect();
        if !cleared_rows.is_empty() {
            self.collapse(|row| cleared_rows.contains(&row));
            debug!(rows = ?cleared_rows.as_slice(), "cleared full rows");
        }
        cleared_rows
    }

    /// Two-pointer pass from the bottom up that drops the rows `remove`
    /// selects and shifts the rest down, with zero allocation
    fn collapse(&mut self, remove: impl Fn(usize) -> bool) {
        let mut write_row = HEIGHT;

        for read_row in (0..HEIGHT).rev() {
            if remove(read_row) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * WIDTH;
                let dst = write_row * WIDTH;
                self.cells.copy_within(src..src + WIDTH, dst);
            }
        }

        // Rows left above the write pointer are vacated
        self.cells[..write_row * WIDTH].fill(Cell::Empty);
    }

    /// Iterate over the rows, top to bottom
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Build a board from its text form
    ///
    /// One line per row, top row first. `0` and `.` are empty cells, any
    /// other non-whitespace character is occupied. Whitespace inside a line
    /// is ignored and blank lines are skipped, so the output of
    /// [`Display`](fmt::Display) parses back.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetrazone_core::Board;
    ///
    /// let mut text = String::new();
    /// for _ in 0..19 {
    ///     text.push_str("..........\n");
    /// }
    /// text.push_str("...X......\n");
    ///
    /// let board = Board::from_text(&text).unwrap();
    /// assert!(board.is_occupied(19, 3));
    /// assert_eq!(board.occupied_count(), 1);
    /// ```
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let mut board = Self::new();
        let mut rows = 0usize;
        let mut last_cols = 0usize;

        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            let marks = || line.chars().filter(|ch| !ch.is_whitespace());
            last_cols = marks().count();
            if last_cols != WIDTH || rows >= HEIGHT {
                return Err(GridError::MalformedBoard {
                    rows: rows + 1,
                    cols: last_cols,
                });
            }
            for (col, ch) in marks().enumerate() {
                if !matches!(ch, '0' | '.') {
                    board.cells[rows * WIDTH + col] = Cell::Occupied;
                }
            }
            rows += 1;
        }

        if rows != HEIGHT {
            return Err(GridError::MalformedBoard {
                rows,
                cols: last_cols,
            });
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows of `0`/`X` marks separated by spaces, top row first
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.row_slices() {
            for (col, cell) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
