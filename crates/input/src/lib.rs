//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::Command`]s. Every key press
//! produces at most one command; there is no auto-repeat handling, so holding
//! a key moves the piece at the terminal's own repeat rate.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
