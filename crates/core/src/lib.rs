//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the simulation of a falling-block colour matching
//! puzzle: 2x2 two-colour pieces fall onto a 16x10 board, same-coloured 2x2
//! squares are marked, and a sweeping timeline clears marked cells into score.
//! It has **no dependencies** on terminals, input devices or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical games
//! - **Testable**: Every frame runs in a fixed order with no hidden state
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//! - **Fast**: Fixed-size arrays, no allocation on the frame path
//!
//! # Module Structure
//!
//! - [`board`]: 16x10 grid with move validation, match marking, column clears and settling gravity
//! - [`piece`]: the active 2x2 piece and its gravity / slam / grace state machine
//! - [`timeline`]: the sweeping cursor that clears marked cells and keeps score
//! - [`session`]: one game; orders piece, timeline and gravity within a frame
//! - [`app`]: title / arcade / game-over screen state machine
//! - [`theme`]: colour table for renderers
//! - [`rng`]: deterministic piece pattern selection
//! - [`snapshot`]: read-only view for renderers and tools
//!
//! # Frame Order
//!
//! Each [`GameSession::update`](session::GameSession::update) call is one frame:
//!
//! 1. **Piece**: gravity tick, slam, or commit into the board
//! 2. **Timeline**: advance one unit; clear a column on each column boundary
//! 3. **Gravity**: every 3 frames while a cascade is pending, drop unsupported
//!    cells by one row and re-validate all matches
//!
//! # Example
//!
//! ```
//! use lumines_core::GameSession;
//! use lumines_types::Command;
//!
//! let mut session = GameSession::new(12345);
//! session.update(); // spawns the first piece
//!
//! session.apply_command(Command::MoveLeft);
//! session.apply_command(Command::RotateCw);
//! session.apply_command(Command::SlamPressed);
//!
//! for _ in 0..20 {
//!     session.update();
//! }
//! assert!(session.board().filled_count() > 0);
//! ```

pub mod app;
pub mod board;
pub mod piece;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod theme;
pub mod timeline;

pub use lumines_types as types;

// Re-export commonly used types for convenience
pub use app::{App, Screen, ScreenEvent};
pub use board::{Board, Cell};
pub use piece::{ActivePiece, PieceController, PieceEvent, PiecePhase, FOOTPRINT};
pub use rng::{PatternPicker, SimpleRng, PIECE_PATTERNS};
pub use session::{FrameReport, GameSession};
pub use snapshot::{GameSnapshot, PieceSnapshot, SessionOutcome, TimelineSnapshot};
pub use theme::{theme, theme_index, Theme, THEMES, THEME_COUNT};
pub use timeline::{pass_score, SweepStep, Timeline};
