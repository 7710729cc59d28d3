//! Board module - manages the locked-cell grid
//!
//! The board is a cols x rows grid where each cell is empty or locked with a
//! piece kind. Uses flat row-major storage; dimensions come from `BoardConfig`.
//! Coordinates: (x, y) with x growing left to right and y growing top to bottom.

use crate::config::BoardConfig;
use crate::types::{Cell, PieceKind};

/// The game board - locked cells only; the falling piece lives in the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: i16,
    rows: i16,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. The config is validated by the engine
    /// constructor before it reaches here.
    pub fn new(config: BoardConfig) -> Self {
        let cols = i16::from(config.cols);
        let rows = i16::from(config.rows);
        Self {
            cols,
            rows,
            cells: vec![None; cols as usize * rows as usize],
        }
    }

    /// Calculate flat index from (x, y); `None` when out of bounds
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols || y < 0 || y >= self.rows {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    pub fn cols(&self) -> i16 {
        self.cols
    }

    pub fn rows(&self) -> i16 {
        self.rows
    }

    /// Get cell at (x, y); `None` if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) holds a locked cell. Out-of-range queries are false,
    /// never a panic.
    pub fn is_locked(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a falling piece may occupy (x, y).
    ///
    /// Cells above the top edge (y < 0) are admitted so tall pieces can spawn
    /// partially off-screen; x out of range or y past the floor is not.
    pub fn admits(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.cols || y >= self.rows {
            return false;
        }
        !self.is_locked(x, y)
    }

    /// Lock the given absolute cells. Cells out of range (including y < 0,
    /// above the visible board) are dropped; locking a locked cell is
    /// idempotent.
    pub fn lock(&mut self, cells: &[(i16, i16)], kind: PieceKind) {
        for &(x, y) in cells {
            if let Some(idx) = self.index(x, y) {
                self.cells[idx] = Some(kind);
            }
        }
    }

    /// Check if a row is completely locked
    pub fn is_row_full(&self, y: i16) -> bool {
        match self.index(0, y) {
            Some(start) => {
                let end = start + self.cols as usize;
                self.cells[start..end].iter().all(|cell| cell.is_some())
            }
            None => false,
        }
    }

    /// Indices of completely locked rows, top to bottom
    pub fn full_rows(&self) -> Vec<i16> {
        (0..self.rows).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and compact everything above them downward.
    ///
    /// Single bottom-up sweep: each surviving row is copied to its final
    /// position and the freed rows at the top are blanked. Collecting the row
    /// list first and compacting in one pass is what keeps two adjacent full
    /// rows from half-clearing, unlike a shift-while-scanning removal.
    /// Returns the number of rows removed.
    pub fn clear_rows(&mut self, rows: &[i16]) -> usize {
        let width = self.cols as usize;
        let mut write_y = self.rows;

        for read_y in (0..self.rows).rev() {
            if rows.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y as usize * width;
                let dst = write_y as usize * width;
                self.cells.copy_within(src..src + width, dst);
            }
        }

        for cell in &mut self.cells[..write_y as usize * width] {
            *cell = None;
        }

        write_y as usize
    }

    /// Detect and remove all full rows; returns their indices, top to bottom
    pub fn clear_full_rows(&mut self) -> Vec<i16> {
        let full = self.full_rows();
        if !full.is_empty() {
            self.clear_rows(&full);
        }
        full
    }

    /// Number of locked cells on the board
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Set every cell to empty
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}
