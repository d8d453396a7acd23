//! Runtime module - hosts the game controller on tokio
//!
//! The controller itself is synchronous. This crate gives it a home inside a
//! single tokio task (an actor) and turns the outside world into messages on
//! its mailbox:
//!
//! - **Commands** from a front-end (keyboard or stdin lines)
//! - **Ticks** posted by [`TokioScheduler`] after the gravity interval
//! - **Snapshot requests** answered over a oneshot channel
//! - **Shutdown**
//!
//! Because every mutation is a mailbox message, at most one is in flight at
//! any time. Ticks are never cancelled: a tick that lands after a pause is
//! delivered and the controller ignores it.
//!
//! Everything the controller reports (frames, cleared lines, game over,
//! rejected input) comes back as an [`Event`] on an unbounded channel.
//! [`protocol`] turns those events into line-delimited JSON for the headless
//! front-end.
//!
//! # Example
//!
//! ```no_run
//! use blockfall_runtime::{spawn_game, Event};
//! use blockfall_runtime::core::EngineConfig;
//! use blockfall_runtime::types::Command;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let mut game = spawn_game(EngineConfig::default());
//! game.handle.send(Command::Play).await?;
//!
//! while let Some(event) = game.events.recv().await {
//!     if let Event::GameOver = event {
//!         break;
//!     }
//! }
//! game.handle.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor;
pub mod engine;
pub mod protocol;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use actor::{
    spawn_game, Event, EventSink, GameHandle, GameSummary, Inbound, RunningGame, TokioScheduler,
};
pub use engine::Engine;
pub use protocol::{Encoder, Message, Observation};
