//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game command.
///
/// Arrows move and rotate, space hard-drops. `p`, `s` and `x` stand in for
/// the play, pause and stop buttons.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::Down),

        // Rotation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::Rotate),

        KeyCode::Char(' ') => Some(Command::HardDrop),

        // Run control
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Play),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::Pause),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::Stop),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
