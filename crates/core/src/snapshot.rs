//! Snapshot module - read-only view of a session for renderers and tools
//!
//! [`GameSnapshot`] is plain `Copy` data with fixed-size arrays, refreshed in
//! place by `GameSession::snapshot_into` so a render loop never allocates.
//! It serializes to camelCase JSON for the headless simulator.

use serde::Serialize;

use crate::piece::ActivePiece;
use crate::types::{CellKind, BOARD_HEIGHT, BOARD_WIDTH};

const W: usize = BOARD_WIDTH as usize;
const H: usize = BOARD_HEIGHT as usize;

/// Terminal state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SessionOutcome {
    /// A piece landed above the visible board
    #[serde(rename_all = "camelCase")]
    TopOut { final_score: u32 },
}

impl SessionOutcome {
    pub fn final_score(&self) -> u32 {
        match self {
            SessionOutcome::TopOut { final_score } => *final_score,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PieceSnapshot {
    pub x: i8,
    pub y: i8,
    pub cells: [CellKind; 4],
    pub active: bool,
}

impl From<ActivePiece> for PieceSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            x: value.x,
            y: value.y,
            cells: value.cells,
            active: value.active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TimelineSnapshot {
    pub column: u8,
    pub phase: u8,
}

/// Read-only view of a session for renderers and tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: [[CellKind; W]; H],
    pub marked: [[bool; W]; H],
    pub piece: PieceSnapshot,
    pub timeline: TimelineSnapshot,
    pub score: u32,
    pub pending_cleared: u32,
    pub frame: u64,
    pub outcome: Option<SessionOutcome>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[CellKind::Empty; W]; H];
        self.marked = [[false; W]; H];
        self.piece = PieceSnapshot::from(ActivePiece::inactive());
        self.timeline = TimelineSnapshot::default();
        self.score = 0;
        self.pending_cleared = 0;
        self.frame = 0;
        self.outcome = None;
    }

    pub fn playable(&self) -> bool {
        self.outcome.is_none()
    }

    /// Kind at (x, y) with the active piece drawn over the board
    pub fn composed_kind(&self, x: usize, y: usize) -> CellKind {
        if self.piece.active {
            let dx = x as i16 - self.piece.x as i16;
            let dy = y as i16 - self.piece.y as i16;
            if (0..2).contains(&dx) && (0..2).contains(&dy) {
                return self.piece.cells[(dy * 2 + dx) as usize];
            }
        }
        self.board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(CellKind::Empty)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[CellKind::Empty; W]; H],
            marked: [[false; W]; H],
            piece: PieceSnapshot::from(ActivePiece::inactive()),
            timeline: TimelineSnapshot::default(),
            score: 0,
            pending_cleared: 0,
            frame: 0,
            outcome: None,
        }
    }
}
