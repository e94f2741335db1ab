//! Game session module - owns and steps one game
//!
//! This module ties together the board, the piece controller and the
//! timeline. Each call to [`GameSession::update`] is one frame and always
//! runs in the same order:
//!
//! 1. piece update (may commit a piece into the board)
//! 2. timeline update (may clear swept cells)
//! 3. settling gravity, on its own cadence, while a cascade is pending;
//!    falling cells rest on the active piece rather than under it

use log::{debug, info};

use crate::board::Board;
use crate::piece::{PieceController, PieceEvent};
use crate::snapshot::{GameSnapshot, PieceSnapshot, SessionOutcome, TimelineSnapshot};
use crate::timeline::{SweepStep, Timeline};
use crate::types::{Command, SETTLE_GRAVITY_FRAMES};

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub piece: PieceEvent,
    pub sweep: SweepStep,
    /// A settling gravity step moved at least one cell
    pub gravity_moved: bool,
    /// Set on the frame the session ends and on every frame after
    pub outcome: Option<SessionOutcome>,
}

impl FrameReport {
    fn idle(outcome: Option<SessionOutcome>) -> Self {
        Self {
            piece: PieceEvent::Idle,
            sweep: SweepStep::default(),
            gravity_moved: false,
            outcome,
        }
    }
}

/// Complete state of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    pieces: PieceController,
    timeline: Timeline,
    gravity_pending: bool,
    gravity_timer: u32,
    outcome: Option<SessionOutcome>,
    frame: u64,
}

impl GameSession {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            pieces: PieceController::new(seed),
            timeline: Timeline::new(),
            gravity_pending: false,
            gravity_timer: 0,
            outcome: None,
            frame: 0,
        }
    }

    /// Reset board, piece, timeline and score in one step.
    ///
    /// The piece RNG keeps running so consecutive games differ.
    pub fn new_game(&mut self) {
        if let Some(outcome) = self.outcome {
            debug!("new game after final score {}", outcome.final_score());
        }
        self.board.reset();
        self.pieces.reset();
        self.timeline.reset();
        self.gravity_pending = false;
        self.gravity_timer = 0;
        self.outcome = None;
        self.frame = 0;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &PieceController {
        &self.pieces
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn score(&self) -> u32 {
        self.timeline.score()
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn gravity_pending(&self) -> bool {
        self.gravity_pending
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Route a gameplay command to the piece controller.
    ///
    /// Returns true if the command changed the piece. Non-gameplay commands and
    /// commands after the session ended are ignored.
    pub fn apply_command(&mut self, command: Command) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        match command {
            Command::MoveLeft => self.pieces.move_left(&self.board),
            Command::MoveRight => self.pieces.move_right(&self.board),
            Command::SlamPressed => self.pieces.slam(),
            Command::SlamReleased => {
                self.pieces.release_slam();
                true
            }
            Command::RotateCw => {
                self.pieces.rotate_cw();
                self.pieces.piece().active
            }
            Command::RotateCcw => {
                self.pieces.rotate_ccw();
                self.pieces.piece().active
            }
            Command::Confirm | Command::NextTheme => false,
        }
    }

    /// Step the session by one frame.
    pub fn update(&mut self) -> FrameReport {
        if self.outcome.is_some() {
            return FrameReport::idle(self.outcome);
        }
        self.frame += 1;

        let mut report = FrameReport::idle(None);

        report.piece = self.pieces.update(&mut self.board);
        match report.piece {
            PieceEvent::Committed => self.gravity_pending = true,
            PieceEvent::ToppedOut => {
                let outcome = SessionOutcome::TopOut {
                    final_score: self.score(),
                };
                info!("session over, final score {}", outcome.final_score());
                self.outcome = Some(outcome);
                report.outcome = self.outcome;
                return report;
            }
            _ => {}
        }

        report.sweep = self.timeline.update(&mut self.board);
        if report.sweep.cleared > 0 {
            self.gravity_pending = true;
        }

        if self.gravity_pending {
            self.gravity_timer += 1;
            if self.gravity_timer >= SETTLE_GRAVITY_FRAMES {
                self.gravity_timer = 0;
                report.gravity_moved = self
                    .board
                    .apply_gravity_step_around(Some(self.pieces.piece()));
                if report.gravity_moved {
                    self.board.validate_all_matches();
                } else {
                    self.gravity_pending = false;
                }
            }
        }

        report
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board, &mut out.marked);
        out.piece = PieceSnapshot::from(*self.pieces.piece());
        out.timeline = TimelineSnapshot {
            column: self.timeline.column(),
            phase: self.timeline.phase(),
        };
        out.score = self.timeline.score();
        out.pending_cleared = self.timeline.pending_cleared();
        out.frame = self.frame;
        out.outcome = self.outcome;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn pieces_mut(&mut self) -> &mut PieceController {
        &mut self.pieces
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
