//! Piece module - the seven four-cell shapes and their rotation tables
//!
//! A piece is anchored on the top-left corner of its first cell. Every shape
//! kind is described by a static layout: the cell offsets relative to the
//! anchor, the rotation pivot, and a bounding box with a per-rotation offset
//! table. The box is only used for drawing the backdrop behind the piece;
//! collision always works on the cells themselves.
//!
//! Rotation uses one fixed pivot per shape and never tries wall kicks: a turn
//! that would clip a wall or the stack is simply rejected by the board.

use crate::cell::{Bounds, Cell, Pivot, Point};
use crate::types::{Color, Move, Rotation, ShapeKind};

/// Bounding-box offsets `(min_x, min_y, max_x, max_y)` per rotation state, in cells
type BoundsOffsets = [[i32; 4]; 4];

const JLSZT_BOUNDS: BoundsOffsets = [[0, 1, 0, 0], [1, 0, 0, 0], [0, 0, 0, -1], [0, 0, -1, 0]];

const I_BOUNDS: BoundsOffsets = [[0, 2, 0, -1], [2, 0, -1, 0], [0, 1, 0, -2], [1, 0, -2, 0]];

const O_BOUNDS: BoundsOffsets = [[1, 1, -1, 0]; 4];

/// Static description of one shape kind
struct Layout {
    /// Cell offsets from the anchor cell, in cells (`+x` right, `+y` up)
    cells: [(i32, i32); 4],
    /// Pivot offset from the anchor, in half cells
    pivot: (i32, i32),
    /// Unrotated bounding box relative to the anchor, in cells
    bounds: [i32; 4],
    bounds_offsets: &'static BoundsOffsets,
}

fn layout(kind: ShapeKind) -> &'static Layout {
    match kind {
        ShapeKind::I => &Layout {
            cells: [(0, 0), (1, 0), (2, 0), (3, 0)],
            pivot: (4, -2),
            bounds: [0, -3, 4, 1],
            bounds_offsets: &I_BOUNDS,
        },
        ShapeKind::J => &Layout {
            cells: [(0, 0), (0, -1), (1, -1), (2, -1)],
            pivot: (3, -3),
            bounds: [0, -3, 3, 0],
            bounds_offsets: &JLSZT_BOUNDS,
        },
        ShapeKind::L => &Layout {
            cells: [(0, 0), (-2, -1), (-1, -1), (0, -1)],
            pivot: (-1, -3),
            bounds: [-2, -3, 1, 0],
            bounds_offsets: &JLSZT_BOUNDS,
        },
        ShapeKind::S => &Layout {
            cells: [(0, 0), (1, 0), (-1, -1), (0, -1)],
            pivot: (1, -3),
            bounds: [-1, -3, 2, 0],
            bounds_offsets: &JLSZT_BOUNDS,
        },
        ShapeKind::Z => &Layout {
            cells: [(0, 0), (1, 0), (1, -1), (2, -1)],
            pivot: (3, -3),
            bounds: [0, -3, 3, 0],
            bounds_offsets: &JLSZT_BOUNDS,
        },
        ShapeKind::O => &Layout {
            cells: [(0, 0), (1, 0), (0, -1), (1, -1)],
            pivot: (2, -2),
            bounds: [-1, -3, 3, 0],
            bounds_offsets: &O_BOUNDS,
        },
        ShapeKind::T => &Layout {
            cells: [(0, 0), (-1, -1), (0, -1), (1, -1)],
            pivot: (1, -3),
            bounds: [-1, -3, 2, 0],
            bounds_offsets: &JLSZT_BOUNDS,
        },
    }
}

/// Candidate next state of a piece, computed without touching the piece
///
/// Produced by [`Piece::trial`], checked against the board, and only then
/// handed to [`Piece::commit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    kind: ShapeKind,
    movement: Move,
    cells: [Cell; 4],
    anchor: Point,
    rotation: Rotation,
}

impl Trial {
    pub fn cells(&self) -> &[Cell; 4] {
        &self.cells
    }

    pub fn movement(&self) -> Move {
        self.movement
    }

    /// Rotation state the piece would have after committing
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

/// The active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    rotation: Rotation,
    cells: [Cell; 4],
    anchor: Point,
    cell_size: i32,
}

impl Piece {
    /// Lay out `kind` in its spawn orientation, anchored at `origin`.
    ///
    /// `origin` is the top-left corner of the anchor cell, in pixels.
    pub fn spawn(kind: ShapeKind, origin: Point, cell_size: i32) -> Self {
        let color = kind.color();
        let cells = layout(kind).cells.map(|(dx, dy)| {
            Cell::square(
                Point::new(origin.x + dx * cell_size, origin.y + dy * cell_size),
                cell_size,
                color,
            )
        });
        Self {
            kind,
            rotation: Rotation::North,
            cells,
            anchor: origin,
            cell_size,
        }
    }

    /// Spawn with the anchor cell at grid `(row, column)`.
    pub fn spawn_at(kind: ShapeKind, row: i32, column: i32, cell_size: i32) -> Self {
        let origin = Point::new(column * cell_size, (row + 1) * cell_size);
        Self::spawn(kind, origin, cell_size)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn cells(&self) -> &[Cell; 4] {
        &self.cells
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Rotation center. Follows translations; rotating leaves it in place.
    pub fn pivot(&self) -> Pivot {
        let (hx, hy) = layout(self.kind).pivot;
        let half = f64::from(self.cell_size) / 2.0;
        Pivot {
            x: f64::from(self.anchor.x) + f64::from(hx) * half,
            y: f64::from(self.anchor.y) + f64::from(hy) * half,
        }
    }

    /// Backdrop box for the current rotation state.
    pub fn bounds(&self) -> Bounds {
        let layout = layout(self.kind);
        let offsets = layout.bounds_offsets[self.rotation.index()];
        let at = |i: usize| (layout.bounds[i] + offsets[i]) * self.cell_size;
        Bounds {
            min_x: self.anchor.x + at(0),
            min_y: self.anchor.y + at(1),
            max_x: self.anchor.x + at(2),
            max_y: self.anchor.y + at(3),
        }
    }

    /// Compute where `movement` would take the piece.
    pub fn trial(&self, movement: Move) -> Trial {
        let (dx, dy) = match movement {
            Move::Left => (-1, 0),
            Move::Right => (1, 0),
            Move::Down => (0, -1),
            Move::Rotate => {
                let pivot = self.pivot();
                return Trial {
                    kind: self.kind,
                    movement,
                    cells: self.cells.map(|c| c.rotate(pivot)),
                    anchor: self.anchor,
                    rotation: self.rotation.rotate_cw(),
                };
            }
        };
        Trial {
            kind: self.kind,
            movement,
            cells: self.cells.map(|c| c.translate(dx, dy)),
            anchor: Point::new(
                self.anchor.x + dx * self.cell_size,
                self.anchor.y + dy * self.cell_size,
            ),
            rotation: self.rotation,
        }
    }

    /// Adopt a trial that the board accepted.
    pub fn commit(&mut self, trial: Trial) {
        debug_assert_eq!(trial.kind, self.kind, "trial belongs to another piece");
        self.cells = trial.cells;
        self.anchor = trial.anchor;
        self.rotation = trial.rotation;
    }

    /// True if any of `cells` coincides with one of this piece's cells.
    pub fn overlaps(&self, cells: &[Cell]) -> bool {
        cells.iter().any(|other| self.cells.contains(other))
    }
}
