//! Piece module - the single falling 2x2 piece and its controller
//!
//! The controller owns the active piece, its gravity timer, the slam
//! (instant drop) flags and the spawn grace period. It only touches the
//! board through [`Board::is_move_valid`] and a single
//! [`Board::place_piece`] call when the piece lands.

use log::{info, trace};

use crate::board::Board;
use crate::rng::PatternPicker;
use crate::types::{CellKind, DROP_DELAY_FRAMES, SPAWN_GRACE_CYCLES, SPAWN_X, SPAWN_Y};

/// Cell offsets of the 2x2 footprint in slot order: TL, TR, BL, BR
pub const FOOTPRINT: [(i8, i8); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    /// Column of the top-left cell
    pub x: i8,
    /// Row of the top-left cell (negative while above the board)
    pub y: i8,
    /// Colours in slot order: TL, TR, BL, BR
    pub cells: [CellKind; 4],
    pub active: bool,
    /// Frames since the last gravity tick
    pub drop_timer: u32,
    /// Slam engaged: fall to the floor on the next update
    pub drop_lock: bool,
    /// Slam input still held since it last triggered
    pub slam_latch: bool,
    /// Gravity ticks left to skip after spawning
    pub grace_cycles: u8,
}

impl ActivePiece {
    /// A freshly spawned piece with the given colours
    pub fn spawn(cells: [CellKind; 4]) -> Self {
        Self {
            x: SPAWN_X,
            y: SPAWN_Y,
            cells,
            active: true,
            drop_timer: 0,
            drop_lock: false,
            slam_latch: false,
            grace_cycles: SPAWN_GRACE_CYCLES,
        }
    }

    /// Placeholder before the first spawn
    pub fn inactive() -> Self {
        Self {
            active: false,
            grace_cycles: 0,
            ..Self::spawn([CellKind::Empty; 4])
        }
    }

    /// Rotate the colours clockwise: TL←BL, TR←TL, BR←TR, BL←BR
    pub fn rotate_cw(&mut self) {
        let [tl, tr, bl, br] = self.cells;
        self.cells = [bl, tl, br, tr];
    }

    /// Inverse of [`rotate_cw`](Self::rotate_cw)
    pub fn rotate_ccw(&mut self) {
        let [tl, tr, bl, br] = self.cells;
        self.cells = [tr, br, tl, bl];
    }
}

/// Lifecycle phase of the controller's piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiecePhase {
    /// No piece; the next update spawns one
    Spawning,
    Falling,
    /// Slam engaged, the piece is pinned to its landing row
    Locking,
}

/// Result of one controller update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceEvent {
    /// Nothing of note happened
    Idle,
    Spawned,
    /// Moved down one row on a gravity tick
    Fell,
    /// Landed and written into the board
    Committed,
    /// Landed while still above the visible board; the session is over
    ToppedOut,
}

/// Owns the active piece and drives its per-frame state machine
#[derive(Debug, Clone)]
pub struct PieceController {
    piece: ActivePiece,
    picker: PatternPicker,
}

impl PieceController {
    pub fn new(seed: u32) -> Self {
        Self {
            piece: ActivePiece::inactive(),
            picker: PatternPicker::new(seed),
        }
    }

    pub fn piece(&self) -> &ActivePiece {
        &self.piece
    }

    pub fn phase(&self) -> PiecePhase {
        if !self.piece.active {
            PiecePhase::Spawning
        } else if self.piece.drop_lock {
            PiecePhase::Locking
        } else {
            PiecePhase::Falling
        }
    }

    /// Drop the current piece; the slam latch survives so a held key does not
    /// slam the next piece.
    pub fn reset(&mut self) {
        let slam_latch = self.piece.slam_latch;
        self.piece = ActivePiece::inactive();
        self.piece.slam_latch = slam_latch;
    }

    /// Spawn a new piece at the top center with a random pattern
    pub fn spawn(&mut self) {
        let slam_latch = self.piece.slam_latch;
        self.piece = ActivePiece::spawn(self.picker.next_pattern());
        self.piece.slam_latch = slam_latch;
        trace!("spawned piece {:?}", self.piece.cells);
    }

    /// Advance the piece by one frame.
    pub fn update(&mut self, board: &mut Board) -> PieceEvent {
        if !self.piece.active {
            self.spawn();
            return PieceEvent::Spawned;
        }

        let piece = &mut self.piece;
        if piece.drop_lock {
            while board.is_move_valid(piece.x, piece.y + 1) {
                piece.y += 1;
            }
            piece.drop_timer = DROP_DELAY_FRAMES + 1;
        } else {
            piece.drop_timer += 1;
        }

        if piece.drop_timer < DROP_DELAY_FRAMES {
            return PieceEvent::Idle;
        }
        piece.drop_timer = 0;

        if piece.grace_cycles > 0 {
            piece.grace_cycles -= 1;
            return PieceEvent::Idle;
        }

        if board.is_move_valid(piece.x, piece.y + 1) {
            piece.y += 1;
            return PieceEvent::Fell;
        }

        if piece.y < -1 {
            info!("top-out at column {}", piece.x);
            return PieceEvent::ToppedOut;
        }

        debug_assert!(
            board.is_move_valid(piece.x, piece.y),
            "committing over occupied cells at ({}, {})",
            piece.x,
            piece.y
        );
        board.place_piece(piece);
        piece.active = false;
        PieceEvent::Committed
    }

    /// Shift one column left if the board allows it
    pub fn move_left(&mut self, board: &Board) -> bool {
        self.try_shift(board, -1)
    }

    /// Shift one column right if the board allows it
    pub fn move_right(&mut self, board: &Board) -> bool {
        self.try_shift(board, 1)
    }

    fn try_shift(&mut self, board: &Board, dx: i8) -> bool {
        if !self.piece.active {
            return false;
        }
        let x = self.piece.x + dx;
        if board.is_move_valid(x, self.piece.y) {
            self.piece.x = x;
            true
        } else {
            false
        }
    }

    /// Engage the instant drop, once per press.
    pub fn slam(&mut self) -> bool {
        if self.piece.slam_latch {
            return false;
        }
        self.piece.slam_latch = true;
        if self.piece.active {
            self.piece.drop_lock = true;
        }
        true
    }

    /// Slam input released; the next press may slam again.
    pub fn release_slam(&mut self) {
        self.piece.slam_latch = false;
    }

    /// Rotation never checks the board; it only permutes colours.
    pub fn rotate_cw(&mut self) {
        if self.piece.active {
            self.piece.rotate_cw();
        }
    }

    pub fn rotate_ccw(&mut self) {
        if self.piece.active {
            self.piece.rotate_ccw();
        }
    }

    #[cfg(test)]
    pub(crate) fn piece_mut(&mut self) -> &mut ActivePiece {
        &mut self.piece
    }
}
