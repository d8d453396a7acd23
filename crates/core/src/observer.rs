//! Collaborator seams - renderer, score sink and tick scheduler
//!
//! The controller never draws, counts points or owns a clock. It notifies a
//! [`Renderer`] after each committed mutation, reports cleared lines to a
//! [`ScoreSink`], and asks a [`TickScheduler`] to call [`tick`] back later.
//!
//! [`tick`]: crate::controller::GameController::tick

use std::time::Duration;

use crate::board::Board;
use crate::cell::Cell;
use crate::piece::Piece;
use crate::types::{RunState, ShapeKind};

/// Borrowed view of the game handed to a [`Renderer`]
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub state: RunState,
    pub board: &'a Board,
    pub active: Option<&'a Piece>,
    pub next: ShapeKind,
    /// Lines cleared since the last stop
    pub lines: u32,
}

impl<'a> Frame<'a> {
    pub fn locked_cells(&self) -> &'a [Cell] {
        self.board.locked_cells()
    }

    /// Cells of the active piece, empty when there is none
    pub fn active_cells(&self) -> &'a [Cell] {
        match self.active {
            Some(piece) => piece.cells(),
            None => &[],
        }
    }
}

/// Consumes geometry after every committed change.
pub trait Renderer: Send {
    fn render(&mut self, frame: &Frame<'_>);

    /// Called once when the game ends.
    fn game_over(&mut self) {}
}

/// Receives the number of lines cleared by each lock that cleared any.
pub trait ScoreSink: Send {
    fn lines_cleared(&mut self, count: u32);

    /// Called once when the game ends.
    fn game_over(&mut self) {}
}

/// Arranges for `GameController::tick(epoch)` to be called after a delay.
///
/// Implementations need not support cancellation; a tick delivered after a
/// pause, or from an epoch that a later `play` replaced, is ignored by the
/// controller.
pub trait TickScheduler: Send {
    fn schedule_tick(&mut self, after: Duration, epoch: u64);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullScoreSink;

impl ScoreSink for NullScoreSink {
    fn lines_cleared(&mut self, _count: u32) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullScheduler;

impl TickScheduler for NullScheduler {
    fn schedule_tick(&mut self, _after: Duration, _epoch: u64) {}
}
