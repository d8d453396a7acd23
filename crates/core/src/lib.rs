//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: cell geometry,
//! the seven shapes, the board and the controller that ties them together.
//! It has **no dependencies** on terminals, clocks or async runtimes; those
//! are plugged in through the traits in [`observer`].
//!
//! # Module Structure
//!
//! - [`cell`]: unit squares in pixel space, translation and rotation
//! - [`piece`]: shape layouts, pivots, backdrop boxes and trial moves
//! - [`sequencer`]: fixed round-robin shape order
//! - [`board`]: 10x20 occupancy grid, collision checks and line clearing
//! - [`controller`]: run-state machine, movement protocol and tick handling
//! - [`observer`]: renderer, score sink and tick scheduler seams
//! - [`snapshot`]: owned copy of a frame for other threads and serializers
//! - [`config`]: engine configuration with environment overrides
//!
//! # Game Rules
//!
//! - **Deterministic order**: I, J, L, S, Z, O, T, repeating
//! - **Simple rotation**: one quarter turn clockwise about a fixed pivot, no
//!   wall kicks
//! - **Lock on landing**: a `Down` that does not fit locks the piece at once
//! - **Game over**: any locked cell on the top row, or a spawn that collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameController, MoveOutcome};
//! use blockfall_core::types::{Move, RunState, ShapeKind};
//!
//! let mut game = GameController::new(EngineConfig::default());
//! assert_eq!(game.active().map(|p| p.kind()), Some(ShapeKind::I));
//!
//! game.play();
//! assert_eq!(game.state(), RunState::Running);
//! assert_eq!(game.handle(Move::Left), MoveOutcome::Moved);
//!
//! // Hard drop locks the bar on the floor and spawns the next piece.
//! assert_eq!(game.hard_drop(), MoveOutcome::Locked { lines: 0 });
//! assert_eq!(game.active().map(|p| p.kind()), Some(ShapeKind::J));
//! assert_eq!(game.board().locked_cells().len(), 4);
//! ```

pub mod board;
pub mod cell;
pub mod config;
pub mod controller;
pub mod error;
pub mod observer;
pub mod piece;
pub mod sequencer;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cell::{Bounds, Cell, Pivot, Point};
pub use config::EngineConfig;
pub use controller::{GameController, MoveOutcome};
pub use error::{CellError, ConfigError};
pub use observer::{
    Frame, NullRenderer, NullScheduler, NullScoreSink, Renderer, ScoreSink, TickScheduler,
};
pub use piece::{Piece, Trial};
pub use sequencer::ShapeSequencer;
pub use snapshot::{ActiveSnapshot, CellSnapshot, GameSnapshot, GridRect};
