//! App module - screen state machine around the game session
//!
//! Screens are an enum with an explicit transition table
//! ([`Screen::transition`]); the [`App`] applies transitions and routes
//! input to whichever screen is current.

use log::info;

use crate::session::{FrameReport, GameSession};
use crate::snapshot::GameSnapshot;
use crate::theme::{theme, theme_index, Theme, THEME_COUNT};
use crate::types::{Command, TITLE_WARMUP_FRAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Title { frames: u32 },
    Arcade,
    GameOver { frames: u32, final_score: u32 },
}

/// Inputs to the screen transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenEvent {
    Confirm,
    TopOut { final_score: u32 },
}

impl Screen {
    pub fn title() -> Self {
        Screen::Title { frames: 0 }
    }

    /// The transition table. `None` means the event is ignored on this screen.
    pub fn transition(&self, event: ScreenEvent) -> Option<Screen> {
        match (*self, event) {
            (Screen::Title { frames }, ScreenEvent::Confirm) if frames > TITLE_WARMUP_FRAMES => {
                Some(Screen::Arcade)
            }
            (Screen::Arcade, ScreenEvent::TopOut { final_score }) => Some(Screen::GameOver {
                frames: 0,
                final_score,
            }),
            (Screen::GameOver { frames, .. }, ScreenEvent::Confirm)
                if frames > TITLE_WARMUP_FRAMES =>
            {
                Some(Screen::title())
            }
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Title { .. } => "title",
            Screen::Arcade => "arcade",
            Screen::GameOver { .. } => "game-over",
        }
    }

    fn tick(&mut self) {
        match self {
            Screen::Title { frames } | Screen::GameOver { frames, .. } => {
                *frames = frames.saturating_add(1);
            }
            Screen::Arcade => {}
        }
    }
}

/// Top-level application state: current screen, the session and the theme.
#[derive(Debug, Clone)]
pub struct App {
    screen: Screen,
    session: GameSession,
    /// Survives new games
    theme_index: usize,
}

impl App {
    pub fn new(seed: u32, theme: i64) -> Self {
        Self {
            screen: Screen::title(),
            session: GameSession::new(seed),
            theme_index: theme_index(theme),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn theme_index(&self) -> usize {
        self.theme_index
    }

    pub fn theme(&self) -> &'static Theme {
        theme(self.theme_index)
    }

    /// Select a theme; any integer is wrapped into range
    pub fn set_theme(&mut self, index: i64) {
        self.theme_index = theme_index(index);
    }

    /// Route one input event. Returns true if it had an effect.
    pub fn handle_command(&mut self, command: Command) -> bool {
        match command {
            Command::NextTheme => {
                self.theme_index = (self.theme_index + 1) % THEME_COUNT;
                true
            }
            Command::Confirm => match self.screen.transition(ScreenEvent::Confirm) {
                Some(next) => {
                    self.enter(next);
                    true
                }
                None => false,
            },
            _ if self.screen == Screen::Arcade => self.session.apply_command(command),
            _ => false,
        }
    }

    /// Advance the current screen by one frame.
    pub fn update(&mut self) -> Option<FrameReport> {
        if self.screen != Screen::Arcade {
            self.screen.tick();
            return None;
        }

        let report = self.session.update();
        if let Some(outcome) = report.outcome {
            let event = ScreenEvent::TopOut {
                final_score: outcome.final_score(),
            };
            if let Some(next) = self.screen.transition(event) {
                self.enter(next);
            }
        }
        Some(report)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }

    fn enter(&mut self, next: Screen) {
        info!("screen {} -> {}", self.screen.name(), next.name());
        if next == Screen::Arcade {
            self.session.new_game();
        }
        self.screen = next;
    }
}
