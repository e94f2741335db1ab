//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (simulation, terminal rendering, input mapping, tooling).
//!
//! # Board Dimensions
//!
//! - **Width**: 16 columns (indexed 0-15)
//! - **Height**: 10 rows (indexed 0-9)
//! - **Spawn position**: (7, -2), fully hidden above the board
//!
//! # Frame Timing Constants
//!
//! The simulation is frame-stepped; every timer counts frames, not milliseconds.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Wall-clock length of one frame (~60 FPS) |
//! | `DROP_DELAY_FRAMES` | 30 | Frames between piece gravity ticks |
//! | `SETTLE_GRAVITY_FRAMES` | 3 | Frames between settling-block gravity steps |
//! | `SPAWN_GRACE_CYCLES` | 3 | Gravity ticks skipped right after a spawn |
//! | `BLOCK_SIZE` | 16 | Timeline units per board column |
//! | `TITLE_WARMUP_FRAMES` | 30 | Frames before title/game-over accept Confirm |
//!
//! # Examples
//!
//! ```
//! use lumines_types::{CellKind, Command, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert!(CellKind::ColorA.is_filled());
//! assert!(!CellKind::Empty.is_filled());
//!
//! let cmd = Command::from_str("rotateCw").unwrap();
//! assert_eq!(cmd, Command::RotateCw);
//!
//! assert_eq!(BOARD_WIDTH, 16);
//! assert_eq!(BOARD_HEIGHT, 10);
//! ```

use serde::Serialize;

/// Board width in cells (16 columns)
pub const BOARD_WIDTH: u8 = 16;

/// Board height in cells (10 rows)
pub const BOARD_HEIGHT: u8 = 10;

/// Timeline units per board column (one unit per frame)
pub const BLOCK_SIZE: u8 = 16;

/// Wall-clock frame length in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Frames between piece gravity ticks
pub const DROP_DELAY_FRAMES: u32 = 30;

/// Frames between settling-block gravity steps
pub const SETTLE_GRAVITY_FRAMES: u32 = 3;

/// Gravity ticks skipped right after a piece spawns
pub const SPAWN_GRACE_CYCLES: u8 = 3;

/// Score awarded per complete group of four cleared cells
pub const POINTS_PER_GROUP: u32 = 1;

/// Frames the title and game-over screens ignore Confirm for
pub const TITLE_WARMUP_FRAMES: u32 = 30;

/// Spawn column: top-left of the 2x2 footprint at the horizontal center
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn row: two rows above the board so the whole piece is hidden
pub const SPAWN_Y: i8 = -2;

/// Contents of one board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellKind {
    #[default]
    Empty,
    ColorA,
    ColorB,
}

impl CellKind {
    pub fn is_filled(&self) -> bool {
        !matches!(self, CellKind::Empty)
    }
}

/// Discrete input events fed into the simulation.
///
/// Each is delivered at most once per frame per edge transition; raw button
/// state never reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SlamPressed,
    SlamReleased,
    RotateCw,
    RotateCcw,
    Confirm,
    NextTheme,
}

impl Command {
    /// Parse a command from its name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "slampressed" | "slam" => Some(Command::SlamPressed),
            "slamreleased" => Some(Command::SlamReleased),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "confirm" => Some(Command::Confirm),
            "nexttheme" => Some(Command::NextTheme),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SlamPressed => "slamPressed",
            Command::SlamReleased => "slamReleased",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::Confirm => "confirm",
            Command::NextTheme => "nextTheme",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_parse_back() {
        for cmd in [
            Command::MoveLeft,
            Command::MoveRight,
            Command::SlamPressed,
            Command::SlamReleased,
            Command::RotateCw,
            Command::RotateCcw,
            Command::Confirm,
            Command::NextTheme,
        ] {
            assert_eq!(Command::from_str(cmd.as_str()), Some(cmd));
        }
        assert_eq!(Command::from_str("hold"), None);
    }

    #[test]
    fn spawn_column_is_centered() {
        assert_eq!(SPAWN_X, 7);
        assert_eq!(SPAWN_Y, -2);
    }
}
