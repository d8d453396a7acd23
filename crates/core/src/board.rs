//! Board module - occupancy grid and locked cells
//!
//! The board is a 10x20 grid stored as a fixed array of rows, row 0 at the
//! bottom. Next to the matrix the board keeps the list of locked cells (with
//! their colors) for rendering. The two are updated together and must always
//! agree: a grid position is occupied exactly when a locked cell sits on it.
//! [`Board::check_invariants`] verifies this and runs after every mutation in
//! debug builds.
//!
//! Rows are removed in place: clearing row `r` copies rows `r+1..` down by
//! one and blanks the top row, so the matrix never changes shape.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::cell::Cell;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

type Row = [bool; BOARD_WIDTH];

const EMPTY_ROW: Row = [false; BOARD_WIDTH];

/// The playfield - 10 columns x 20 visible rows
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: [Row; BOARD_HEIGHT],
    locked: Vec<Cell>,
    cell_size: i32,
}

impl Board {
    /// Create an empty board whose cells are `cell_size` pixels wide
    pub fn new(cell_size: i32) -> Self {
        Self {
            rows: [EMPTY_ROW; BOARD_HEIGHT],
            locked: Vec::with_capacity(BOARD_WIDTH * BOARD_HEIGHT),
            cell_size,
        }
    }

    pub fn width(&self) -> usize {
        BOARD_WIDTH
    }

    pub fn height(&self) -> usize {
        BOARD_HEIGHT
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Occupancy matrix, row 0 at the bottom
    pub fn rows(&self) -> &[Row; BOARD_HEIGHT] {
        &self.rows
    }

    /// Locked cells, in the order they were absorbed
    pub fn locked_cells(&self) -> &[Cell] {
        &self.locked
    }

    /// Check if grid position is occupied. Out-of-board positions are not.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        match grid_index(row, col) {
            Some((r, c)) => self.rows[r][c],
            None => false,
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < BOARD_HEIGHT && self.rows[row].iter().all(|&filled| filled)
    }

    /// Check if a row has no locked cell at all
    pub fn is_row_empty(&self, row: usize) -> bool {
        row >= BOARD_HEIGHT || self.rows[row].iter().all(|&filled| !filled)
    }

    /// Check whether `cells` may sit where they are.
    ///
    /// Every cell must lie within columns `0..10` and at row 0 or above, and
    /// must not share a grid position with a locked cell. There is no upper
    /// limit: cells above the visible rows are fine.
    pub fn can_place(&self, cells: &[Cell]) -> bool {
        let right_wall = BOARD_WIDTH as i32 * self.cell_size;
        for cell in cells {
            let b = cell.bounds();
            if b.min_x < 0 || b.max_x > right_wall || b.min_y < 0 {
                return false;
            }
            let (row, col) = cell.grid_position();
            if self.is_occupied(row, col) {
                return false;
            }
        }
        true
    }

    /// Lock `cells` into the board.
    ///
    /// Cells above the visible rows have no matrix slot and are dropped.
    /// Returns how many were dropped.
    pub fn absorb(&mut self, cells: &[Cell]) -> usize {
        let mut dropped = 0;
        for cell in cells {
            let (row, col) = cell.grid_position();
            let Some((r, c)) = grid_index(row, col) else {
                debug!(row, col, "dropping cell locked outside the visible board");
                dropped += 1;
                continue;
            };
            debug_assert!(!self.rows[r][c], "absorbing onto occupied cell ({r}, {c})");
            self.rows[r][c] = true;
            self.locked.push(*cell);
        }
        debug_assert!(self.check_invariants(), "occupancy diverged after absorb");
        dropped
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Full rows are collected up front against the current indexing, then
    /// removed from the highest index down. Locked cells on removed rows are
    /// discarded; every other locked cell falls by the number of removed rows
    /// strictly below it.
    pub fn clear_lines(&mut self) -> usize {
        let full: ArrayVec<usize, BOARD_HEIGHT> =
            (0..BOARD_HEIGHT).filter(|&row| self.is_row_full(row)).collect();
        if full.is_empty() {
            return 0;
        }

        for &row in full.iter().rev() {
            self.rows.copy_within(row + 1.., row);
            self.rows[BOARD_HEIGHT - 1] = EMPTY_ROW;
        }

        self.locked.retain_mut(|cell| {
            let (row, _) = cell.grid_position();
            let row = row as usize;
            if full.contains(&row) {
                return false;
            }
            let below = full.iter().filter(|&&r| r < row).count() as i32;
            if below > 0 {
                *cell = cell.translate(0, -below);
            }
            true
        });

        debug_assert!(self.check_invariants(), "occupancy diverged after clear");
        full.len()
    }

    /// Empty the matrix and forget every locked cell
    pub fn reset(&mut self) {
        self.rows = [EMPTY_ROW; BOARD_HEIGHT];
        self.locked.clear();
    }

    /// True when the matrix marks exactly the positions of the locked cells.
    pub fn check_invariants(&self) -> bool {
        let mut expected = [EMPTY_ROW; BOARD_HEIGHT];
        for cell in &self.locked {
            let (row, col) = cell.grid_position();
            let Some((r, c)) = grid_index(row, col) else {
                return false;
            };
            if expected[r][c] {
                return false;
            }
            expected[r][c] = true;
        }
        expected == self.rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_CELL_SIZE)
    }
}

#[inline(always)]
fn grid_index(row: i32, col: i32) -> Option<(usize, usize)> {
    if row < 0 || row >= BOARD_HEIGHT as i32 || col < 0 || col >= BOARD_WIDTH as i32 {
        return None;
    }
    Some((row as usize, col as usize))
}
