//! Cell module - the unit square every piece and the board are made of
//!
//! A cell is four corner points in pixel space (`y` grows upwards) plus a
//! color tag. Cells are values: translating or rotating returns a new cell.
//! Two cells are equal when their corner sets match, in any order; the color
//! does not take part in equality.

use std::fmt;

use crate::error::CellError;
use crate::types::Color;

/// A corner point in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rotation center. May sit on a half pixel (e.g. the middle of a 3x3 box).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot {
    pub x: f64,
    pub y: f64,
}

/// Axis-aligned box in pixels: `min_x..max_x` by `min_y..max_y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

/// A unit square of the board grid
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    points: [Point; 4],
    size: i32,
    color: Color,
}

impl Cell {
    /// Square whose top-left corner is `top_left`.
    ///
    /// Corners are listed clockwise starting at the top-right one.
    pub fn square(top_left: Point, size: i32, color: Color) -> Self {
        let Point { x, y } = top_left;
        Self {
            points: [
                Point::new(x + size, y),
                Point::new(x + size, y - size),
                Point::new(x, y - size),
                Point::new(x, y),
            ],
            size,
            color,
        }
    }

    /// Validating constructor.
    ///
    /// The points must be 4 distinct corners of an axis-aligned square whose
    /// side is `size`.
    pub fn try_new(size: i32, color: Color, points: &[Point]) -> Result<Self, CellError> {
        let points: [Point; 4] = points
            .try_into()
            .map_err(|_| CellError::WrongPointCount(points.len()))?;
        if size <= 0 {
            return Err(CellError::InvalidSize(size));
        }
        for (i, p) in points.iter().enumerate() {
            if points[i + 1..].contains(p) {
                return Err(CellError::DuplicatePoint(*p));
            }
        }

        let cell = Self {
            points,
            size,
            color,
        };
        let b = cell.bounds();
        let on_corners = points
            .iter()
            .all(|p| (p.x == b.min_x || p.x == b.max_x) && (p.y == b.min_y || p.y == b.max_y));
        if !on_corners || b.max_x - b.min_x != size || b.max_y - b.min_y != size {
            return Err(CellError::NotSquare { size });
        }
        Ok(cell)
    }

    /// Like [`Cell::try_new`], for points known at the call site.
    ///
    /// # Panics
    ///
    /// Panics if the points do not describe a cell. A malformed cell is a
    /// programming error and is never recovered from.
    pub fn new(size: i32, color: Color, points: &[Point]) -> Self {
        match Self::try_new(size, color, points) {
            Ok(cell) => cell,
            Err(err) => panic!("malformed cell: {err}"),
        }
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.points
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Same geometry, different color tag
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Shift by `dx` columns and `dy` rows (board units).
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        let (ox, oy) = (dx * self.size, dy * self.size);
        Self {
            points: self.points.map(|p| Point::new(p.x + ox, p.y + oy)),
            ..*self
        }
    }

    /// Quarter turn clockwise (−90°) about `pivot`.
    ///
    /// Coordinates are rounded to whole pixels, ties towards +∞, so repeated
    /// rotations never accumulate drift and the result stays a square.
    pub fn rotate(&self, pivot: Pivot) -> Self {
        let rotated = self.points.map(|p| {
            let x = pivot.x + (f64::from(p.y) - pivot.y);
            let y = pivot.y - (f64::from(p.x) - pivot.x);
            Point::new(round_pixel(x), round_pixel(y))
        });
        let cell = Self {
            points: rotated,
            ..*self
        };
        debug_assert!(Self::try_new(cell.size, cell.color, &cell.points).is_ok());
        cell
    }

    pub fn bounds(&self) -> Bounds {
        let mut b = Bounds {
            min_x: i32::MAX,
            min_y: i32::MAX,
            max_x: i32::MIN,
            max_y: i32::MIN,
        };
        for p in &self.points {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
        }
        b
    }

    /// Grid position as `(row, column)`, row 0 at the bottom.
    ///
    /// Negative or out-of-board values are returned as-is.
    pub fn grid_position(&self) -> (i32, i32) {
        let b = self.bounds();
        (b.min_y.div_euclid(self.size), b.min_x.div_euclid(self.size))
    }

    /// Top-left corner, the point cell layouts are anchored on
    pub fn top_left(&self) -> Point {
        let b = self.bounds();
        Point::new(b.min_x, b.max_y)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        // Corners are distinct, so containment both ways is set equality.
        self.points.iter().all(|p| other.points.contains(p))
            && other.points.iter().all(|p| self.points.contains(p))
    }
}

impl Eq for Cell {}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.bounds();
        write!(
            f,
            "Cell({}, {}, {}, {})",
            b.min_x, b.min_y, b.max_x, b.max_y
        )
    }
}

fn round_pixel(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}
