//! Owned copy of a [`Frame`], for renderers that hand the picture to another
//! thread (the terminal view) or serialize it (the headless protocol).

use crate::cell::Cell;
use crate::observer::Frame;
use crate::types::{Color, Rotation, RunState, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// One cell in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSnapshot {
    pub row: i32,
    pub col: i32,
    pub color: Color,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        let (row, col) = cell.grid_position();
        Self {
            row,
            col,
            color: cell.color(),
        }
    }
}

/// Grid rectangle, `left..right` by `bottom..top` (exclusive ends)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridRect {
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
    pub top: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: Rotation,
    pub cells: [CellSnapshot; 4],
    /// Rotation backdrop box
    pub bounds: GridRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub state: RunState,
    pub occupancy: [[bool; BOARD_WIDTH]; BOARD_HEIGHT],
    pub locked: Vec<CellSnapshot>,
    pub active: Option<ActiveSnapshot>,
    pub next: ShapeKind,
    pub lines: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            state: RunState::Idle,
            occupancy: [[false; BOARD_WIDTH]; BOARD_HEIGHT],
            locked: Vec::new(),
            active: None,
            next: ShapeKind::I,
            lines: 0,
        }
    }
}

impl GameSnapshot {
    /// Overwrite `self` with `frame`, reusing the locked-cell allocation.
    pub fn copy_from(&mut self, frame: &Frame<'_>) {
        let size = frame.board.cell_size();
        self.state = frame.state;
        self.occupancy = *frame.board.rows();
        self.locked.clear();
        self.locked
            .extend(frame.locked_cells().iter().map(CellSnapshot::from));
        self.active = frame.active.map(|piece| {
            let b = piece.bounds();
            ActiveSnapshot {
                kind: piece.kind(),
                rotation: piece.rotation(),
                cells: piece.cells().each_ref().map(CellSnapshot::from),
                bounds: GridRect {
                    left: b.min_x.div_euclid(size),
                    bottom: b.min_y.div_euclid(size),
                    right: b.max_x.div_euclid(size),
                    top: b.max_y.div_euclid(size),
                },
            }
        });
        self.next = frame.next;
        self.lines = frame.lines;
    }
}

impl From<&Frame<'_>> for GameSnapshot {
    fn from(frame: &Frame<'_>) -> Self {
        let mut snap = Self::default();
        snap.copy_from(frame);
        snap
    }
}
