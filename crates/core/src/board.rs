//! Board module - manages the game grid
//!
//! The board is a 10x20 grid of settled cell values (`0` empty, `1..=7` piece id).
//! Rows are stored as fixed-size arrays so every row always has exactly
//! `COLS` cells.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use crate::types::{Cell, COLS, EMPTY, ROWS};

/// One board row.
pub type Row = [Cell; COLS];

const EMPTY_ROW: Row = [EMPTY; COLS];

/// The game board - 20 rows of 10 cells, row 0 on top
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [Row; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; ROWS],
        }
    }

    /// Create a board from explicit rows.
    pub fn from_rows(rows: [Row; ROWS]) -> Self {
        Self { rows }
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        COLS
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and non-zero)
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(c) if c != EMPTY)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .map(|row| row.iter().all(|&c| c != EMPTY))
            .unwrap_or(false)
    }

    /// Check if a row has no settled cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .map(|row| row.iter().all(|&c| c == EMPTY))
            .unwrap_or(false)
    }

    /// Remove every full row, shifting the rows above down.
    ///
    /// Scans bottom to top. After a row is removed the same index is examined
    /// again, since the row shifted into it may be full as well.
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = ROWS;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                // copy_within handles the overlapping shift.
                self.rows.copy_within(0..row, 1);
                self.rows[0] = EMPTY_ROW;
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Borrow all rows, top to bottom.
    pub fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Count of non-empty cells.
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&c| c != EMPTY)
            .count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.rows = [EMPTY_ROW; ROWS];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Line-clear engine entry point: consume a board and return the compacted
/// board with the number of rows removed.
pub fn clear_lines(mut board: Board) -> (Board, u32) {
    let cleared = board.clear_lines();
    (board, cleared)
}
