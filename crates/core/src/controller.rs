//! Game controller - run-state machine and command routing
//!
//! The controller owns the board, the active piece and the sequencer. Every
//! movement request follows the same protocol: compute a [`Trial`] from the
//! piece, ask the board whether it fits, and only then commit it. A `Down`
//! that does not fit locks the piece instead.
//!
//! # States
//!
//! ```text
//!            play                 pause
//!   Idle ──────────▶ Running ◀──────────▶ Paused
//!    ▲                  │         play
//!    │ stop             │ top row reached / spawn blocked
//!    └──────────── GameOver
//! ```
//!
//! `stop()` returns to `Idle` from any state. While `GameOver`, every other
//! call is ignored.
//!
//! # Ticks
//!
//! [`GameController::play`] asks the [`TickScheduler`] for a tick after the
//! configured interval, and every tick taken while running asks for the next
//! one. Each `play` starts a new tick epoch and every scheduled tick carries
//! the epoch it was scheduled in. A tick from an older epoch, or one that
//! arrives while not running, does nothing at all, so a timer left over from
//! before a pause can neither move the game nor start a second chain.
//!
//! [`Trial`]: crate::piece::Trial

use std::fmt;

use tracing::{debug, info, trace, warn};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::observer::{
    Frame, NullRenderer, NullScheduler, NullScoreSink, Renderer, ScoreSink, TickScheduler,
};
use crate::piece::Piece;
use crate::sequencer::ShapeSequencer;
use crate::types::{Command, Move, RunState, ShapeKind, TOP_ROW};

/// What a movement request did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece moved or turned
    Moved,
    /// The move did not fit; nothing changed
    Blocked,
    /// The piece landed and was locked; `lines` rows were cleared
    Locked { lines: usize },
    /// The request found a locked cell on the top row and ended the game
    GameOver,
    /// No active piece, or the game is already over
    Ignored,
}

impl MoveOutcome {
    /// True if the request changed the game
    pub fn changed(&self) -> bool {
        matches!(
            self,
            MoveOutcome::Moved | MoveOutcome::Locked { .. } | MoveOutcome::GameOver
        )
    }
}

/// The falling-block game: board, active piece and run state
pub struct GameController {
    board: Board,
    active: Option<Piece>,
    sequencer: ShapeSequencer,
    state: RunState,
    lines: u32,
    /// Bumped by every `play`; ticks from older epochs are stale
    tick_epoch: u64,
    config: EngineConfig,
    scheduler: Box<dyn TickScheduler>,
    renderer: Box<dyn Renderer>,
    score: Box<dyn ScoreSink>,
}

impl GameController {
    /// Create an idle game with its first piece already spawned
    pub fn new(config: EngineConfig) -> Self {
        let mut controller = Self {
            board: Board::new(config.cell_size),
            active: None,
            sequencer: ShapeSequencer::new(),
            state: RunState::Idle,
            lines: 0,
            tick_epoch: 0,
            config,
            scheduler: Box::new(NullScheduler),
            renderer: Box::new(NullRenderer),
            score: Box::new(NullScoreSink),
        };
        controller.spawn_next();
        controller
    }

    pub fn with_scheduler(mut self, scheduler: impl TickScheduler + 'static) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn with_score_sink(mut self, score: impl ScoreSink + 'static) -> Self {
        self.score = Box::new(score);
        self
    }

    /// Replace the board with a prepared one, e.g. a puzzle position.
    ///
    /// The active piece is kept; a piece that no longer fits ends the game
    /// the same way a blocked spawn does.
    pub fn with_board(mut self, board: Board) -> Self {
        debug_assert_eq!(board.cell_size(), self.config.cell_size);
        self.board = board;
        let blocked = self
            .active
            .as_ref()
            .is_some_and(|piece| !self.board.can_place(piece.cells()));
        if blocked {
            self.enter_game_over();
        }
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Kind of the piece that will spawn next
    pub fn next_kind(&self) -> ShapeKind {
        self.sequencer.peek()
    }

    /// Lines cleared since creation or the last stop
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Epoch that a tick must carry to be taken
    pub fn tick_epoch(&self) -> u64 {
        self.tick_epoch
    }

    /// Borrowed view of the current game
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            state: self.state,
            board: &self.board,
            active: self.active.as_ref(),
            next: self.sequencer.peek(),
            lines: self.lines,
        }
    }

    /// Push the current frame to the renderer without changing anything
    pub fn refresh(&mut self) {
        self.render();
    }

    /// Start or resume ticking. Returns false if nothing changed.
    pub fn play(&mut self) -> bool {
        match self.state {
            RunState::Idle | RunState::Paused => {
                info!(from = self.state.as_str(), "game running");
                self.state = RunState::Running;
                self.tick_epoch = self.tick_epoch.wrapping_add(1);
                self.scheduler
                    .schedule_tick(self.config.tick_interval, self.tick_epoch);
                self.render();
                true
            }
            RunState::Running | RunState::GameOver => false,
        }
    }

    /// Stop ticking. A tick already scheduled will find the game paused.
    pub fn pause(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        info!("game paused");
        self.state = RunState::Paused;
        self.render();
        true
    }

    /// Clear the board and start over with a fresh piece, from any state
    pub fn stop(&mut self) {
        info!(from = self.state.as_str(), "game stopped");
        self.state = RunState::Idle;
        self.board.reset();
        self.active = None;
        self.lines = 0;
        self.spawn_next();
        self.render();
    }

    /// One gravity step for a tick scheduled in `epoch`.
    ///
    /// Does nothing, and schedules nothing, unless running in that epoch.
    pub fn tick(&mut self, epoch: u64) -> bool {
        if self.state != RunState::Running || epoch != self.tick_epoch {
            trace!(
                state = self.state.as_str(),
                epoch,
                current = self.tick_epoch,
                "ignoring tick"
            );
            return false;
        }
        self.handle(Move::Down);
        if self.state == RunState::Running {
            self.scheduler
                .schedule_tick(self.config.tick_interval, self.tick_epoch);
        }
        true
    }

    /// Try one movement of the active piece.
    pub fn handle(&mut self, movement: Move) -> MoveOutcome {
        if let Some(outcome) = self.refuse_move() {
            return outcome;
        }
        let Some(piece) = self.active.as_mut() else {
            return MoveOutcome::Ignored;
        };

        let trial = piece.trial(movement);
        if self.board.can_place(trial.cells()) {
            piece.commit(trial);
            self.render();
            return MoveOutcome::Moved;
        }

        match movement {
            Move::Down => MoveOutcome::Locked { lines: self.lock() },
            Move::Left | Move::Right | Move::Rotate => MoveOutcome::Blocked,
        }
    }

    /// Drop the active piece as far as it goes and lock it once.
    pub fn hard_drop(&mut self) -> MoveOutcome {
        if let Some(outcome) = self.refuse_move() {
            return outcome;
        }
        let Some(piece) = self.active.as_mut() else {
            return MoveOutcome::Ignored;
        };

        let mut rows = 0u32;
        loop {
            let trial = piece.trial(Move::Down);
            if !self.board.can_place(trial.cells()) {
                break;
            }
            piece.commit(trial);
            rows += 1;
        }
        debug!(rows, "hard drop");
        MoveOutcome::Locked { lines: self.lock() }
    }

    /// Route an input command. Returns true if it changed the game.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Left => self.handle(Move::Left).changed(),
            Command::Right => self.handle(Move::Right).changed(),
            Command::Down => self.handle(Move::Down).changed(),
            Command::Rotate => self.handle(Move::Rotate).changed(),
            Command::HardDrop => self.hard_drop().changed(),
            Command::Play => self.play(),
            Command::Pause => self.pause(),
            Command::Stop => {
                self.stop();
                true
            }
        }
    }

    /// Parse and route a command name. Unknown names change nothing.
    pub fn apply_str(&mut self, name: &str) -> bool {
        match Command::from_str(name) {
            Some(command) => self.apply(command),
            None => {
                warn!(command = name, "unrecognized command");
                false
            }
        }
    }

    /// Shared gate of `handle` and `hard_drop`: nothing moves once the game
    /// is over, and any locked cell on the top row ends it.
    fn refuse_move(&mut self) -> Option<MoveOutcome> {
        if self.state == RunState::GameOver {
            return Some(MoveOutcome::Ignored);
        }
        if !self.board.is_row_empty(TOP_ROW) {
            self.enter_game_over();
            return Some(MoveOutcome::GameOver);
        }
        None
    }

    /// Absorb the active piece, clear lines, report them and spawn the next
    /// piece. Returns the number of cleared lines.
    fn lock(&mut self) -> usize {
        let Some(piece) = self.active.take() else {
            return 0;
        };
        let dropped = self.board.absorb(piece.cells());
        if dropped > 0 {
            debug!(
                kind = piece.kind().as_str(),
                dropped, "piece locked partly above the board"
            );
        }
        let lines = self.board.clear_lines();
        debug!(kind = piece.kind().as_str(), lines, "piece locked");

        if lines > 0 {
            self.lines += lines as u32;
            self.score.lines_cleared(lines as u32);
        }
        self.spawn_next();
        self.render();
        lines
    }

    /// Spawn the next kind at the spawn point. A spawn that does not fit
    /// ends the game.
    fn spawn_next(&mut self) -> bool {
        let kind = self.sequencer.next_kind();
        let piece = Piece::spawn(kind, self.config.spawn_origin(), self.config.cell_size);
        if !self.board.can_place(piece.cells()) {
            info!(kind = kind.as_str(), "spawn blocked");
            self.enter_game_over();
            return false;
        }
        debug!(kind = kind.as_str(), "spawned piece");
        self.active = Some(piece);
        true
    }

    fn enter_game_over(&mut self) {
        if self.state == RunState::GameOver {
            return;
        }
        info!(lines = self.lines, "game over");
        self.state = RunState::GameOver;
        self.active = None;
        self.score.game_over();
        self.renderer.game_over();
        self.render();
    }

    fn render(&mut self) {
        let frame = Frame {
            state: self.state,
            board: &self.board,
            active: self.active.as_ref(),
            next: self.sequencer.peek(),
            lines: self.lines,
        };
        self.renderer.render(&frame);
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl fmt::Debug for GameController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameController")
            .field("state", &self.state)
            .field("active", &self.active)
            .field("board", &self.board)
            .field("lines", &self.lines)
            .field("tick_epoch", &self.tick_epoch)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
