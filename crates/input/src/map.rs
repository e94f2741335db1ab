//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Physical key roles, before edge tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Maps straight to one command per press
    Command(Command),
    /// The held slam key (press and release both matter)
    Slam,
}

/// Map a key code to its role.
pub fn key_role(code: KeyCode) -> Option<KeyRole> {
    let role = match code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => KeyRole::Command(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => KeyRole::Command(Command::MoveRight),

        // Slam
        KeyCode::Down
        | KeyCode::Char(' ')
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => KeyRole::Slam,

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => KeyRole::Command(Command::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Char('c') | KeyCode::Char('C') => {
            KeyRole::Command(Command::RotateCcw)
        }

        // Screens / presentation
        KeyCode::Enter => KeyRole::Command(Command::Confirm),
        KeyCode::Char('t') | KeyCode::Char('T') => KeyRole::Command(Command::NextTheme),

        _ => return None,
    };
    Some(role)
}

/// Map a key press directly to a command (slam key maps to `SlamPressed`).
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key_role(key.code)? {
        KeyRole::Command(cmd) => Some(cmd),
        KeyRole::Slam => Some(Command::SlamPressed),
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
