//! Synchronous front door for the game actor.
//!
//! The terminal front-end runs a plain blocking loop around crossterm. It
//! owns an [`Engine`], which keeps a private tokio runtime alive for the
//! actor and its tick timers.

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing::debug;

use crate::actor::{spawn_game, Event, GameHandle};
use crate::core::EngineConfig;
use crate::types::Command;

/// A game actor on its own runtime.
pub struct Engine {
    rt: Runtime,
    handle: GameHandle,
    events: mpsc::UnboundedReceiver<Event>,
}

impl Engine {
    pub fn start(config: EngineConfig) -> Result<Self> {
        let rt = Runtime::new().context("failed to create tokio runtime")?;
        let game = {
            let _guard = rt.enter();
            spawn_game(config)
        };
        Ok(Self {
            rt,
            handle: game.handle,
            events: game.events,
        })
    }

    pub fn send(&self, command: Command) -> Result<()> {
        self.handle.blocking_send(command)
    }

    /// Next pending event, without waiting.
    pub fn try_event(&mut self) -> Option<Event> {
        self.events.try_recv().ok()
    }

    pub fn handle(&self) -> &GameHandle {
        &self.handle
    }

    /// Stop the actor and tear the runtime down.
    pub fn shutdown(self) -> Result<()> {
        self.handle.blocking_shutdown()?;
        debug!("engine shutting down");
        self.rt.shutdown_background();
        Ok(())
    }
}
