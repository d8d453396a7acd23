//! Terminal runner (default binary).
//!
//! Keys are read with crossterm in a blocking poll loop. The game itself runs
//! in the runtime's actor, which owns the tick timer; this loop only forwards
//! commands and redraws whenever a new frame arrives.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use tracing::info;

use blockfall::core::{EngineConfig, GameSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging;
use blockfall::runtime::{Engine, Event};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Longest wait for a key before checking for new frames
const POLL_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    logging::init_from_env()?;
    let config = EngineConfig::from_env();
    info!(tick = ?config.tick_interval, "starting terminal front-end");

    let mut engine = Engine::start(config)?;
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut engine, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    engine.shutdown()?;
    result
}

fn run(engine: &mut Engine, term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        while let Some(event) = engine.try_event() {
            match event {
                Event::Frame(frame) => {
                    snap = frame;
                    dirty = true;
                }
                Event::LinesCleared(count) => info!(count, "lines cleared"),
                Event::GameOver => info!(lines = snap.lines, "game over"),
                Event::Rejected(_) => {}
            }
        }

        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(command) = handle_key_event(key) {
                    engine.send(command)?;
                }
            }
            TermEvent::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
