//! Timeline module - the sweeping clear cursor
//!
//! The timeline advances one unit per frame and enters a new column every
//! [`BLOCK_SIZE`] units. Leaving a column clears that column's marked cells.
//! Cleared cells accumulate over a full pass of the board; when the cursor
//! wraps back to column 0 the pass is converted into score.

use log::debug;

use crate::board::Board;
use crate::types::{BLOCK_SIZE, BOARD_WIDTH, POINTS_PER_GROUP};

/// Cells that make up one scoring group
pub const CELLS_PER_GROUP: u32 = 4;

/// Score for one full pass: complete groups only, partial groups are dropped
pub fn pass_score(cleared: u32) -> u32 {
    (cleared / CELLS_PER_GROUP) * POINTS_PER_GROUP
}

/// Result of one timeline frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepStep {
    /// Cells cleared this frame
    pub cleared: u32,
    /// Score awarded this frame (non-zero only when a pass completed)
    pub points: u32,
    /// The cursor wrapped back to column 0
    pub pass_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    column: u8,
    phase: u8,
    pending_cleared: u32,
    score: u32,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            column: 0,
            phase: 0,
            pending_cleared: 0,
            score: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Column currently being swept
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Progress within the current column, `0..BLOCK_SIZE`
    pub fn phase(&self) -> u8 {
        self.phase
    }

    /// Cells cleared so far in the current pass
    pub fn pending_cleared(&self) -> u32 {
        self.pending_cleared
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Advance by one frame.
    pub fn update(&mut self, board: &mut Board) -> SweepStep {
        let mut step = SweepStep::default();

        self.phase += 1;
        if self.phase < BLOCK_SIZE {
            return step;
        }
        self.phase = 0;

        step.cleared = board.clear_column(self.column);
        if step.cleared > 0 {
            debug!("timeline cleared {} cells in column {}", step.cleared, self.column);
        }
        self.pending_cleared += step.cleared;

        self.column += 1;
        if self.column >= BOARD_WIDTH {
            self.column = 0;
            step.pass_completed = true;
            step.points = pass_score(self.pending_cleared);
            self.score = self.score.saturating_add(step.points);
            if self.pending_cleared > 0 {
                debug!(
                    "pass complete: {} cells -> {} points (score {})",
                    self.pending_cleared, step.points, self.score
                );
            }
            self.pending_cleared = 0;
        }

        step
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellKind;

    const FRAMES_PER_PASS: u32 = BOARD_WIDTH as u32 * BLOCK_SIZE as u32;

    #[test]
    fn test_pass_score_floors_partial_groups() {
        assert_eq!(pass_score(0), 0);
        assert_eq!(pass_score(3), 0);
        assert_eq!(pass_score(4), 1);
        assert_eq!(pass_score(7), 1);
        assert_eq!(pass_score(8), 2);
    }

    #[test]
    fn test_cursor_advances_one_column_per_block() {
        let mut board = Board::new();
        let mut tl = Timeline::new();

        for _ in 0..BLOCK_SIZE - 1 {
            tl.update(&mut board);
        }
        assert_eq!(tl.column(), 0);
        assert_eq!(tl.phase(), BLOCK_SIZE - 1);

        tl.update(&mut board);
        assert_eq!(tl.column(), 1);
        assert_eq!(tl.phase(), 0);
    }

    #[test]
    fn test_cursor_wraps_after_full_pass() {
        let mut board = Board::new();
        let mut tl = Timeline::new();
        let mut wraps = 0;
        for _ in 0..FRAMES_PER_PASS {
            if tl.update(&mut board).pass_completed {
                wraps += 1;
            }
        }
        assert_eq!(wraps, 1);
        assert_eq!(tl.column(), 0);
        assert_eq!(tl.phase(), 0);
    }

    #[test]
    fn test_marked_square_scores_after_pass() {
        let mut board = Board::from_rows(&["AA", "AA"]);
        board.validate_all_matches();
        let mut tl = Timeline::new();

        let mut cleared = 0;
        for _ in 0..2 * BLOCK_SIZE as u32 {
            cleared += tl.update(&mut board).cleared;
        }
        assert_eq!(cleared, 4);
        assert_eq!(tl.pending_cleared(), 4);
        assert_eq!(tl.score(), 0);

        for _ in 2 * BLOCK_SIZE as u32..FRAMES_PER_PASS {
            tl.update(&mut board);
        }
        assert_eq!(tl.score(), 1);
        assert_eq!(tl.pending_cleared(), 0);
        assert_eq!(board.kind(0, 9), CellKind::Empty);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut board = Board::new();
        let mut tl = Timeline::new();
        for _ in 0..40 {
            tl.update(&mut board);
        }
        tl.reset();
        assert_eq!(tl, Timeline::new());
    }
}
