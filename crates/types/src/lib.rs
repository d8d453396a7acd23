//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the terminal front-end and the headless protocol alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 visible rows (indexed 0-19, row 0 at the bottom)
//! - **Spawn anchor**: top-left corner of cell (column 4, row 21), two rows
//!   above the visible area
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 400 | Gravity tick interval while running |
//! | `DEFAULT_CELL_SIZE` | 20 | Pixel size of one cell (rendering scale only) |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Move, ShapeKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(ShapeKind::from_str("t"), Some(ShapeKind::T));
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! let cmd = Command::from_str("hardDrop").unwrap();
//! assert_eq!(cmd, Command::HardDrop);
//! assert_eq!(Command::Left.movement(), Some(Move::Left));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Visible board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Index of the topmost visible row. A locked cell here ends the game.
pub const TOP_ROW: usize = BOARD_HEIGHT - 1;

/// Default gravity tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 400;

/// Default cell size in pixels
pub const DEFAULT_CELL_SIZE: i32 = 20;

/// Column of the spawn anchor cell
pub const SPAWN_COLUMN: i32 = 4;

/// Row of the spawn anchor cell (above the visible area)
pub const SPAWN_ROW: i32 = 21;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_and_timing_defaults() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 20);
        assert_eq!(TOP_ROW, 19);
        assert_eq!(DEFAULT_TICK_MS, 400);
        assert!(SPAWN_ROW as usize > TOP_ROW);
    }

    #[test]
    fn shape_order_is_fixed() {
        assert_eq!(
            ShapeKind::ALL,
            [
                ShapeKind::I,
                ShapeKind::J,
                ShapeKind::L,
                ShapeKind::S,
                ShapeKind::Z,
                ShapeKind::O,
                ShapeKind::T,
            ]
        );
    }

    #[test]
    fn rotation_index_wraps_modulo_four() {
        assert_eq!(Rotation::from_index(0), Rotation::North);
        assert_eq!(Rotation::from_index(5), Rotation::East);
        for r in [
            Rotation::North,
            Rotation::East,
            Rotation::South,
            Rotation::West,
        ] {
            assert_eq!(Rotation::from_index(r.index()), r);
            assert_eq!(r.rotate_cw().index(), (r.index() + 1) % 4);
        }
    }

    #[test]
    fn command_parsing_is_case_insensitive() {
        assert_eq!(Command::from_str("LEFT"), Some(Command::Left));
        assert_eq!(Command::from_str("hard_drop"), Some(Command::HardDrop));
        assert_eq!(Command::from_str(" play "), Some(Command::Play));
        assert_eq!(Command::from_str("hold"), None);
        assert_eq!(Command::from_str(""), None);
    }

    #[test]
    fn only_movement_commands_map_to_moves() {
        assert_eq!(Command::Rotate.movement(), Some(Move::Rotate));
        assert_eq!(Command::Down.movement(), Some(Move::Down));
        assert_eq!(Command::HardDrop.movement(), None);
        assert_eq!(Command::Stop.movement(), None);
    }
}

/// The seven piece kinds
///
/// Each kind has a fixed color tag:
/// - **I**: light blue, horizontal bar
/// - **J**: blue
/// - **L**: orange
/// - **S**: green
/// - **Z**: red
/// - **O**: yellow, 2x2 square
/// - **T**: purple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    S,
    Z,
    O,
    T,
}

impl ShapeKind {
    /// All kinds, in the order the sequencer deals them.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::O,
        ShapeKind::T,
    ];

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("O"), Some(ShapeKind::O));
    /// assert_eq!(ShapeKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "o" => Some(ShapeKind::O),
            "t" => Some(ShapeKind::T),
            _ => None,
        }
    }

    /// Lowercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::S => "s",
            ShapeKind::Z => "z",
            ShapeKind::O => "o",
            ShapeKind::T => "t",
        }
    }

    /// Color tag painted on every cell of this kind
    pub fn color(&self) -> Color {
        match self {
            ShapeKind::I => Color::LightBlue,
            ShapeKind::J => Color::Blue,
            ShapeKind::L => Color::Orange,
            ShapeKind::S => Color::Green,
            ShapeKind::Z => Color::Red,
            ShapeKind::O => Color::Yellow,
            ShapeKind::T => Color::Purple,
        }
    }
}

/// Color tag carried by a cell. Purely cosmetic; never consulted by game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    LightBlue,
    Blue,
    Orange,
    Green,
    Red,
    Yellow,
    Purple,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::LightBlue => "lightblue",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
        }
    }
}

/// Rotation states
///
/// - **North**: spawn orientation (index 0)
/// - **East**: one clockwise quarter turn (index 1)
/// - **South**: two quarter turns (index 2)
/// - **West**: three quarter turns (index 3)
///
/// The cycle goes North → East → South → West → North.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation-state index in `0..4`
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Build from an index, taken modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }
}

/// A single piece movement, validated against the board before it is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// One column left
    Left,
    /// One column right
    Right,
    /// One row down; a rejected `Down` locks the piece
    Down,
    /// Quarter turn clockwise about the piece pivot
    Rotate,
}

impl Move {
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Left => "left",
            Move::Right => "right",
            Move::Down => "down",
            Move::Rotate => "rotate",
        }
    }
}

/// Commands produced by an input source
///
/// Both the keyboard front-end and the headless line protocol speak these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Left,
    Right,
    Down,
    Rotate,
    /// Drop to the landing position and lock in one step
    HardDrop,
    /// Start or resume the tick loop
    Play,
    /// Suspend the tick loop
    Pause,
    /// Reset the board and spawn a fresh piece
    Stop,
}

impl Command {
    /// Parse a command name (case-insensitive, surrounding whitespace ignored)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "down" => Some(Command::Down),
            "rotate" => Some(Command::Rotate),
            "harddrop" | "hard_drop" | "hard-drop" => Some(Command::HardDrop),
            "play" => Some(Command::Play),
            "pause" => Some(Command::Pause),
            "stop" => Some(Command::Stop),
            _ => None,
        }
    }

    /// camelCase name used by the headless protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Down => "down",
            Command::Rotate => "rotate",
            Command::HardDrop => "hardDrop",
            Command::Play => "play",
            Command::Pause => "pause",
            Command::Stop => "stop",
        }
    }

    /// The board movement this command requests, if any
    pub fn movement(&self) -> Option<Move> {
        match self {
            Command::Left => Some(Move::Left),
            Command::Right => Some(Move::Right),
            Command::Down => Some(Move::Down),
            Command::Rotate => Some(Move::Rotate),
            Command::HardDrop | Command::Play | Command::Pause | Command::Stop => None,
        }
    }
}

/// Lifecycle of the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunState {
    /// Created or stopped; a piece is spawned but no ticks are scheduled
    #[default]
    Idle,
    /// Ticks are scheduled and applied
    Running,
    /// Ticks are ignored; a late tick is a no-op
    Paused,
    /// Terminal until `stop()`
    GameOver,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Paused => "paused",
            RunState::GameOver => "game_over",
        }
    }
}
