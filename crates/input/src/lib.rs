//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Command`] edges and provides an
//! edge tracker suitable for terminal environments (including terminals
//! without key-release events).

pub mod handler;
pub mod map;

pub use lumines_types as types;

pub use handler::{EdgeTracker, DEFAULT_SLAM_RELEASE_TIMEOUT_MS};
pub use map::{handle_key_event, key_role, should_quit, KeyRole};
