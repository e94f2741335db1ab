//! Board module - manages the play grid
//!
//! The board is a 16x10 grid of cells, each holding a colour kind plus the
//! `marked` (pending clearance) and `protected` (skip the next unmark pass)
//! flags. Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..15 (left to right), y ranges 0..9 (top to bottom).
//! Piece positions may have negative `y` while the piece is still above the board.

use log::trace;

use crate::piece::{ActivePiece, FOOTPRINT};
use crate::types::{CellKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Right-most column a 2x2 footprint may start at
const MAX_PIECE_X: i8 = BOARD_WIDTH as i8 - 2;

/// Lowest row a 2x2 footprint may start at
const MAX_PIECE_Y: i8 = BOARD_HEIGHT as i8 - 2;

/// One grid slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub kind: CellKind,
    /// Part of a same-colour 2x2 square, waiting for the timeline
    pub marked: bool,
    /// Exempt from the next full-board unmark pass
    pub protected: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: CellKind::Empty,
        marked: false,
        protected: false,
    };

    pub fn filled(kind: CellKind) -> Self {
        Self {
            kind,
            marked: false,
            protected: false,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.kind.is_filled()
    }
}

/// The game board - 16 columns x 10 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Kind at (x, y); out-of-bounds reads as empty
    pub fn kind(&self, x: i8, y: i8) -> CellKind {
        self.get(x, y).map(|c| c.kind).unwrap_or(CellKind::Empty)
    }

    /// Overwrite the kind at (x, y), resetting both flags.
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, kind: CellKind) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = Cell::filled(kind);
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c.is_filled())
    }

    pub fn is_marked(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c.marked)
    }

    pub fn is_protected(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c.protected)
    }

    /// Empty every cell and drop all flags. Called on new game.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Check whether a 2x2 footprint with top-left corner at (x, y) fits.
    ///
    /// Footprints entirely above the board (`y < -1`) are always free; a
    /// footprint straddling the top edge (`y == -1`) only checks row 0.
    pub fn is_move_valid(&self, x: i8, y: i8) -> bool {
        if x < 0 || x > MAX_PIECE_X || y > MAX_PIECE_Y {
            return false;
        }
        if y < -1 {
            return true;
        }
        FOOTPRINT
            .iter()
            .filter(|&&(_, dy)| y + dy >= 0)
            .all(|&(dx, dy)| !self.is_occupied(x + dx, y + dy))
    }

    /// Write a landed piece into the board and mark any squares it completes.
    ///
    /// Rows above the board are clipped. A piece whose column is out of range
    /// is ignored. Returns true if at least one cell was written; the caller is
    /// responsible for scheduling a gravity pass.
    pub fn place_piece(&mut self, piece: &ActivePiece) -> bool {
        if piece.x < 0 || piece.x > MAX_PIECE_X {
            return false;
        }

        let mut written = false;
        for (slot, &(dx, dy)) in FOOTPRINT.iter().enumerate() {
            if self.set(piece.x + dx, piece.y + dy, piece.cells[slot]) {
                written = true;
            }
        }

        for &(dx, dy) in FOOTPRINT.iter() {
            let (px, py) = (piece.x + dx, piece.y + dy);
            if Self::index(px, py).is_some() {
                self.scan_neighborhood(px, py);
            }
        }

        if written {
            trace!("placed piece at ({}, {})", piece.x, piece.y);
        }
        written
    }

    /// Mark every same-coloured 2x2 square that has (x, y) as one of its corners.
    pub fn scan_neighborhood(&mut self, x: i8, y: i8) {
        for (ox, oy) in [(-1, -1), (0, -1), (-1, 0), (0, 0)] {
            let (sx, sy) = (x + ox, y + oy);
            if self.square_matches(sx, sy) {
                self.mark_square(sx, sy);
            }
        }
    }

    /// Full-board re-evaluation of matches.
    ///
    /// Unmarks every non-protected cell, then marks every complete square.
    pub fn validate_all_matches(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| !c.protected) {
            cell.marked = false;
        }
        for sy in 0..=MAX_PIECE_Y {
            for sx in 0..=MAX_PIECE_X {
                if self.square_matches(sx, sy) {
                    self.mark_square(sx, sy);
                }
            }
        }
    }

    /// Clear the marked cells of one column.
    ///
    /// Each cleared cell protects its right-hand neighbour for one sweep
    /// visit. Every visited cell loses its own protection. Returns the number
    /// of cells cleared.
    pub fn clear_column(&mut self, col: u8) -> u32 {
        if col >= BOARD_WIDTH {
            return 0;
        }
        let x = col as i8;
        let mut cleared = 0;

        for y in 0..BOARD_HEIGHT as i8 {
            let Some(idx) = Self::index(x, y) else {
                continue;
            };
            if self.cells[idx].marked {
                self.cells[idx].kind = CellKind::Empty;
                self.cells[idx].marked = false;
                if let Some(right) = Self::index(x + 1, y) {
                    self.cells[right].protected = true;
                }
                cleared += 1;
            }
            self.cells[idx].protected = false;
        }

        cleared
    }

    /// Drop every unsupported cell by one row.
    ///
    /// Rows are scanned bottom-up so a cell moves at most once per call.
    /// Returns true if anything moved; callers should re-validate matches and
    /// keep stepping until this returns false.
    pub fn apply_gravity_step(&mut self) -> bool {
        self.apply_gravity_step_around(None)
    }

    /// [`apply_gravity_step`](Self::apply_gravity_step), treating the
    /// footprint of an active piece as solid so falling cells come to rest on
    /// top of it instead of sliding underneath.
    pub fn apply_gravity_step_around(&mut self, piece: Option<&ActivePiece>) -> bool {
        let covers = |x: i8, y: i8| {
            piece.is_some_and(|p| {
                p.active && FOOTPRINT.iter().any(|&(dx, dy)| (p.x + dx, p.y + dy) == (x, y))
            })
        };
        let mut moved = false;

        for y in (0..MAX_PIECE_Y + 1).rev() {
            for x in 0..BOARD_WIDTH as i8 {
                let (Some(src), Some(dst)) = (Self::index(x, y), Self::index(x, y + 1)) else {
                    continue;
                };
                if self.cells[src].is_filled() && !self.cells[dst].is_filled() && !covers(x, y + 1)
                {
                    self.cells[dst] = Cell::filled(self.cells[src].kind);
                    self.cells[src] = Cell::EMPTY;
                    self.scan_neighborhood(x, y + 1);
                    moved = true;
                }
            }
        }

        moved
    }

    /// True when the square with top-left (x, y) is in bounds and all four
    /// corners share one non-empty kind
    fn square_matches(&self, x: i8, y: i8) -> bool {
        if x < 0 || x > MAX_PIECE_X || y < 0 || y > MAX_PIECE_Y {
            return false;
        }
        let kind = self.kind(x, y);
        kind.is_filled()
            && FOOTPRINT
                .iter()
                .all(|&(dx, dy)| self.kind(x + dx, y + dy) == kind)
    }

    fn mark_square(&mut self, x: i8, y: i8) {
        for &(dx, dy) in FOOTPRINT.iter() {
            if let Some(idx) = Self::index(x + dx, y + dy) {
                self.cells[idx].marked = true;
            }
        }
    }

    /// Number of marked cells on the board
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.marked).count()
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as `[row][col]` kind codes plus a marked mask.
    pub fn write_grid(
        &self,
        kinds: &mut [[CellKind; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
        marked: &mut [[bool; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    ) {
        let width = BOARD_WIDTH as usize;
        for (i, cell) in self.cells.iter().enumerate() {
            kinds[i / width][i % width] = cell.kind;
            marked[i / width][i % width] = cell.marked;
        }
    }

    /// Build a board from text rows for tests and tools.
    ///
    /// `.` is empty, `A`/`B` are the two colours; rows are aligned to the
    /// bottom of the board and shorter rows are padded with empties.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len().min(BOARD_HEIGHT as usize);
        for (i, row) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                let kind = match ch {
                    'A' | 'a' => CellKind::ColorA,
                    'B' | 'b' => CellKind::ColorB,
                    _ => CellKind::Empty,
                };
                board.set(x as i8, (top + i) as i8, kind);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
