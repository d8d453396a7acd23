//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It draws into a plain
//! framebuffer of styled characters and flushes only the runs that changed
//! since the previous frame.
//!
//! - [`fb`]: framebuffer and style types
//! - [`game_view`]: pure mapping from a [`GameSnapshot`] to a framebuffer
//! - [`renderer`]: raw-mode terminal output
//!
//! [`GameSnapshot`]: blockfall_core::GameSnapshot

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
