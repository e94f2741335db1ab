//! Edge tracking for terminal key events.
//!
//! The core expects one command per press/release edge. Terminals differ:
//! some report press, repeat and release, others only send repeated presses
//! while a key is held. The tracker collapses repeats and, when no release
//! event arrives, synthesizes `SlamReleased` after a timeout.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEventKind};

use crate::map::{key_role, KeyRole};
use crate::types::Command;

/// Release timeout for terminals that never send key-release events.
///
/// Longer than a typical keyboard auto-repeat delay, so a held key keeps
/// refreshing before it expires.
pub const DEFAULT_SLAM_RELEASE_TIMEOUT_MS: u32 = 350;

/// Tracks held keys and turns raw key events into edge commands.
#[derive(Debug, Clone)]
pub struct EdgeTracker {
    slam_held: bool,
    /// Milliseconds since the slam key was last seen pressed or repeating
    slam_idle_ms: u32,
    slam_release_timeout_ms: u32,
    /// Set once a real release event has been observed
    saw_release_events: bool,
}

impl EdgeTracker {
    pub fn new() -> Self {
        Self::with_slam_release_timeout_ms(DEFAULT_SLAM_RELEASE_TIMEOUT_MS)
    }

    pub fn with_slam_release_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            slam_held: false,
            slam_idle_ms: 0,
            slam_release_timeout_ms: timeout_ms,
            saw_release_events: false,
        }
    }

    pub fn slam_release_timeout_ms(&self) -> u32 {
        self.slam_release_timeout_ms
    }

    pub fn slam_held(&self) -> bool {
        self.slam_held
    }

    /// Feed one key event; returns the command for this edge, if any.
    pub fn handle_key(&mut self, code: KeyCode, kind: KeyEventKind) -> Option<Command> {
        let role = key_role(code)?;
        match (role, kind) {
            (KeyRole::Slam, KeyEventKind::Press) => {
                self.slam_idle_ms = 0;
                if self.slam_held {
                    None
                } else {
                    self.slam_held = true;
                    Some(Command::SlamPressed)
                }
            }
            (KeyRole::Slam, KeyEventKind::Repeat) => {
                self.slam_idle_ms = 0;
                None
            }
            (KeyRole::Slam, KeyEventKind::Release) => {
                self.saw_release_events = true;
                self.release_slam()
            }
            (KeyRole::Command(cmd), KeyEventKind::Press) => Some(cmd),
            (KeyRole::Command(_), _) => None,
        }
    }

    /// Advance the release timeout by `elapsed_ms`.
    ///
    /// Returns the synthesized edges (at most a `SlamReleased`).
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Command, 2> {
        let mut out = ArrayVec::new();
        if !self.slam_held || self.saw_release_events {
            return out;
        }
        self.slam_idle_ms = self.slam_idle_ms.saturating_add(elapsed_ms);
        if self.slam_idle_ms > self.slam_release_timeout_ms {
            if let Some(cmd) = self.release_slam() {
                out.push(cmd);
            }
        }
        out
    }

    fn release_slam(&mut self) -> Option<Command> {
        if !self.slam_held {
            return None;
        }
        self.slam_held = false;
        self.slam_idle_ms = 0;
        Some(Command::SlamReleased)
    }
}

impl Default for EdgeTracker {
    fn default() -> Self {
        Self::new()
    }
}
