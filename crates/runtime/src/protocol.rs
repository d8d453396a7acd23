//! Protocol module - line-delimited JSON for the headless front-end
//!
//! Every [`Event`] becomes one JSON object on one line. All messages carry a
//! `type` tag and a `seq` number that increases by one per message.
//!
//! ```text
//! {"type":"observation","seq":1,"state":"idle","board":[[0,0,...],...],"active":{"kind":"i","rotation":0,"cells":[[21,4],[21,5],[21,6],[21,7]]},"next":"j","lines":0}
//! {"type":"lines_cleared","seq":7,"count":2}
//! {"type":"game_over","seq":8}
//! {"type":"error","seq":9,"message":"unknown command: \"jump\""}
//! ```
//!
//! `board[0]` is the bottom row. Cells are `[row, col]` pairs in the same
//! grid, so cells of a piece still above the board have rows of 20 or more.

use serde::{Deserialize, Serialize};

use crate::actor::Event;
use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    Observation(Observation),
    LinesCleared { seq: u64, count: u32 },
    GameOver { seq: u64 },
    Error { seq: u64, message: String },
}

impl Message {
    pub fn seq(&self) -> u64 {
        match self {
            Message::Observation(obs) => obs.seq,
            Message::LinesCleared { seq, .. }
            | Message::GameOver { seq }
            | Message::Error { seq, .. } => *seq,
        }
    }
}

/// Full picture of the game after a change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub seq: u64,
    pub state: String,
    /// Occupancy, one array per row, bottom row first; 1 = locked cell
    pub board: [[u8; BOARD_WIDTH]; BOARD_HEIGHT],
    pub active: Option<ActivePiece>,
    pub next: String,
    pub lines: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePiece {
    pub kind: String,
    /// Rotation state index, 0..4
    pub rotation: usize,
    /// `[row, col]` per cell
    pub cells: [[i32; 2]; 4],
}

impl From<&ActiveSnapshot> for ActivePiece {
    fn from(active: &ActiveSnapshot) -> Self {
        Self {
            kind: active.kind.as_str().to_string(),
            rotation: active.rotation.index(),
            cells: active.cells.map(|c| [c.row, c.col]),
        }
    }
}

impl Observation {
    pub fn from_snapshot(seq: u64, snap: &GameSnapshot) -> Self {
        Self {
            seq,
            state: snap.state.as_str().to_string(),
            board: snap.occupancy.map(|row| row.map(u8::from)),
            active: snap.active.as_ref().map(ActivePiece::from),
            next: snap.next.as_str().to_string(),
            lines: snap.lines,
        }
    }
}

/// Numbers events and turns them into protocol messages.
#[derive(Debug, Default)]
pub struct Encoder {
    seq: u64,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence number of the last message produced (0 before the first)
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn message(&mut self, event: &Event) -> Message {
        self.seq += 1;
        let seq = self.seq;
        match event {
            Event::Frame(snap) => Message::Observation(Observation::from_snapshot(seq, snap)),
            Event::LinesCleared(count) => Message::LinesCleared { seq, count: *count },
            Event::GameOver => Message::GameOver { seq },
            Event::Rejected(input) => Message::Error {
                seq,
                message: format!("unknown command: {:?}", input.trim()),
            },
        }
    }

    /// One JSON line, without the trailing newline.
    pub fn encode_line(&mut self, event: &Event) -> serde_json::Result<String> {
        serde_json::to_string(&self.message(event))
    }
}
