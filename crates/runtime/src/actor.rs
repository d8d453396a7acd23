//! Single-actor host for the game controller.
//!
//! One task owns the [`GameController`] and drains a bounded mailbox. The
//! scheduler, the front-ends and the tests all talk to it through that
//! mailbox, so the controller never needs a lock.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::core::{
    EngineConfig, Frame, GameController, GameSnapshot, Renderer, ScoreSink, TickScheduler,
};
use crate::types::{Command, RunState};

/// Mailbox depth. Senders wait when the actor falls this far behind.
pub const MAILBOX_CAPACITY: usize = 64;

/// Message delivered to the game actor.
#[derive(Debug)]
pub enum Inbound {
    Command(Command),
    /// Raw command name, parsed by the actor. Unknown names are reported
    /// back as [`Event::Rejected`].
    Text(String),
    /// Gravity step posted by [`TokioScheduler`], tagged with the tick
    /// epoch it was scheduled in
    Tick(u64),
    /// Ask for a copy of the current game
    Snapshot(oneshot::Sender<GameSnapshot>),
    Shutdown,
}

/// Something the controller reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The game changed; carries the full picture after the change
    Frame(GameSnapshot),
    LinesCleared(u32),
    GameOver,
    /// An input line that is not a command
    Rejected(String),
}

/// Final state of the game when the actor exits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub state: RunState,
    pub lines: u32,
}

/// Posts [`Inbound::Tick`] into the mailbox after a delay.
///
/// Holds only a weak sender so a pending tick does not keep the actor alive
/// once every [`GameHandle`] is gone. Scheduled ticks cannot be cancelled;
/// the controller drops the ones whose epoch is no longer current.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    mailbox: mpsc::WeakSender<Inbound>,
    runtime: Handle,
}

impl TokioScheduler {
    /// Must be called from within a tokio runtime.
    pub fn new(mailbox: &mpsc::Sender<Inbound>) -> Self {
        Self {
            mailbox: mailbox.downgrade(),
            runtime: Handle::current(),
        }
    }
}

impl TickScheduler for TokioScheduler {
    fn schedule_tick(&mut self, after: Duration, epoch: u64) {
        let mailbox = self.mailbox.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(after).await;
            if let Some(tx) = mailbox.upgrade() {
                let _ = tx.send(Inbound::Tick(epoch)).await;
            }
        });
    }
}

/// Forwards controller notifications as [`Event`]s.
///
/// Serves as both the renderer and the score sink of a hosted game.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<Event>,
}

impl EventSink {
    pub fn new(tx: mpsc::UnboundedSender<Event>) -> Self {
        Self { tx }
    }

    fn emit(&self, event: Event) {
        // A dropped receiver just means nobody is watching.
        let _ = self.tx.send(event);
    }
}

impl Renderer for EventSink {
    fn render(&mut self, frame: &Frame<'_>) {
        self.emit(Event::Frame(GameSnapshot::from(frame)));
    }
}

impl ScoreSink for EventSink {
    fn lines_cleared(&mut self, count: u32) {
        self.emit(Event::LinesCleared(count));
    }

    fn game_over(&mut self) {
        self.emit(Event::GameOver);
    }
}

/// Cheap, cloneable front door of a running game.
#[derive(Debug, Clone)]
pub struct GameHandle {
    tx: mpsc::Sender<Inbound>,
}

impl GameHandle {
    pub async fn send(&self, command: Command) -> Result<()> {
        self.post(Inbound::Command(command)).await
    }

    /// Send a command by name, e.g. one line of stdin.
    pub async fn send_text(&self, text: impl Into<String>) -> Result<()> {
        self.post(Inbound::Text(text.into())).await
    }

    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        let (tx, rx) = oneshot::channel();
        self.post(Inbound::Snapshot(tx)).await?;
        rx.await.context("game actor dropped the snapshot request")
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.post(Inbound::Shutdown).await
    }

    /// Blocking variant of [`GameHandle::send`] for synchronous callers.
    ///
    /// Panics if called from within an async context.
    pub fn blocking_send(&self, command: Command) -> Result<()> {
        self.tx
            .blocking_send(Inbound::Command(command))
            .map_err(|_| anyhow!("game actor has stopped"))
    }

    pub fn blocking_shutdown(&self) -> Result<()> {
        self.tx
            .blocking_send(Inbound::Shutdown)
            .map_err(|_| anyhow!("game actor has stopped"))
    }

    async fn post(&self, message: Inbound) -> Result<()> {
        self.tx
            .send(message)
            .await
            .map_err(|_| anyhow!("game actor has stopped"))
    }
}

/// A game hosted on the current runtime
#[derive(Debug)]
pub struct RunningGame {
    pub handle: GameHandle,
    pub events: mpsc::UnboundedReceiver<Event>,
    pub task: JoinHandle<GameSummary>,
}

/// Spawn a game actor on the current tokio runtime.
///
/// The game starts `Idle` with its first piece spawned; send
/// [`Command::Play`] to start the tick loop. The first event is always a
/// frame of the idle game.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn spawn_game(config: EngineConfig) -> RunningGame {
    let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);
    let (events_tx, events) = mpsc::unbounded_channel();

    let sink = EventSink::new(events_tx);
    let controller = GameController::new(config)
        .with_scheduler(TokioScheduler::new(&tx))
        .with_renderer(sink.clone())
        .with_score_sink(sink.clone());

    let task = tokio::spawn(run(controller, rx, sink));
    RunningGame {
        handle: GameHandle { tx },
        events,
        task,
    }
}

async fn run(
    mut controller: GameController,
    mut mailbox: mpsc::Receiver<Inbound>,
    sink: EventSink,
) -> GameSummary {
    info!(tick = ?controller.config().tick_interval, "game actor started");
    controller.refresh();

    while let Some(message) = mailbox.recv().await {
        match message {
            Inbound::Command(command) => {
                let changed = controller.apply(command);
                debug!(command = command.as_str(), changed, "applied command");
            }
            Inbound::Text(text) => match Command::from_str(&text) {
                Some(command) => {
                    controller.apply(command);
                }
                None => {
                    warn!(input = %text.trim(), "rejecting unknown command");
                    sink.emit(Event::Rejected(text));
                }
            },
            Inbound::Tick(epoch) => {
                controller.tick(epoch);
            }
            Inbound::Snapshot(reply) => {
                let _ = reply.send(GameSnapshot::from(&controller.frame()));
            }
            Inbound::Shutdown => break,
        }
    }

    let summary = GameSummary {
        state: controller.state(),
        lines: controller.lines(),
    };
    info!(
        state = summary.state.as_str(),
        lines = summary.lines,
        "game actor stopped"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    fn drain(events: &mut mpsc::UnboundedReceiver<Event>) -> Vec<Event> {
        let mut out = Vec::new();
        while let Ok(event) = events.try_recv() {
            out.push(event);
        }
        out
    }

    #[tokio::test(start_paused = true)]
    async fn first_event_is_idle_frame() {
        let mut game = spawn_game(EngineConfig::default());
        let snap = game.handle.snapshot().await.unwrap();
        assert_eq!(snap.state, RunState::Idle);

        match game.events.recv().await {
            Some(Event::Frame(frame)) => {
                assert_eq!(frame.active.map(|a| a.kind), Some(ShapeKind::I));
                assert_eq!(frame.next, ShapeKind::J);
            }
            other => panic!("unexpected first event: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_text_is_rejected_without_mutation() {
        let mut game = spawn_game(EngineConfig::default());
        let before = game.handle.snapshot().await.unwrap();
        drain(&mut game.events);

        game.handle.send_text("teleport").await.unwrap();
        let after = game.handle.snapshot().await.unwrap();

        assert_eq!(before, after);
        assert_eq!(
            drain(&mut game.events),
            vec![Event::Rejected("teleport".to_string())]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_returns_summary() {
        let game = spawn_game(EngineConfig::default());
        game.handle.send(Command::Play).await.unwrap();
        game.handle.shutdown().await.unwrap();

        let summary = game.task.await.unwrap();
        assert_eq!(
            summary,
            GameSummary {
                state: RunState::Running,
                lines: 0
            }
        );
    }
}
