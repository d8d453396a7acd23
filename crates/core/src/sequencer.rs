//! Sequencer module - deterministic round-robin piece order
//!
//! Kinds are dealt in the fixed order I, J, L, S, Z, O, T and the cycle
//! repeats forever. There is no randomness and no 7-bag shuffle: the same
//! order every game is part of the rules.

use crate::types::ShapeKind;

/// Endless round-robin over the seven kinds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShapeSequencer {
    index: usize,
}

impl ShapeSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal the next kind and advance
    pub fn next_kind(&mut self) -> ShapeKind {
        let kind = ShapeKind::ALL[self.index];
        self.index = (self.index + 1) % ShapeKind::ALL.len();
        kind
    }

    /// The kind `next_kind` will return, without advancing
    pub fn peek(&self) -> ShapeKind {
        ShapeKind::ALL[self.index]
    }
}

impl Iterator for ShapeSequencer {
    type Item = ShapeKind;

    fn next(&mut self) -> Option<ShapeKind> {
        Some(self.next_kind())
    }
}
