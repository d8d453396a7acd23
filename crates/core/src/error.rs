//! Error types for cell construction and configuration.

use thiserror::Error;

use crate::cell::Point;

/// A set of corner points that cannot form a cell.
///
/// Cells built by the engine itself are correct by construction; this error
/// only surfaces through [`Cell::try_new`](crate::cell::Cell::try_new).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellError {
    #[error("a cell needs exactly 4 corner points, got {0}")]
    WrongPointCount(usize),

    #[error("cell size must be positive, got {0}")]
    InvalidSize(i32),

    #[error("duplicate corner point {0}")]
    DuplicatePoint(Point),

    #[error("corner points do not form an axis-aligned square of side {size}")]
    NotSquare { size: i32 },
}

/// Rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value:?}")]
    NotANumber { var: &'static str, value: String },

    #[error("{var} must be positive, got {value}")]
    NotPositive { var: &'static str, value: i64 },
}
