//! Terminal runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer.
//! Configuration comes from `LUMINES_*` environment variables.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use lumines_tui::core::{App, GameSnapshot};
use lumines_tui::input::{should_quit, EdgeTracker};
use lumines_tui::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use lumines_tui::types::FRAME_MS;
use lumines_tui::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_level, config.log_path.as_deref())?;
    info!("starting: seed {} theme {}", config.seed, config.theme);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut app = App::new(config.seed, config.theme);
    let mut edges = EdgeTracker::with_slam_release_timeout_ms(config.slam_release_ms);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(FRAME_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.snapshot_into(&mut snap);
        let hud = HudView {
            screen: app.screen(),
            theme: app.theme(),
        };
        view.render_into(&snap, hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit at frame {}", app.session().frame());
                        return Ok(());
                    }
                    if let Some(command) = edges.handle_key(key.code, key.kind) {
                        app.handle_command(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for command in edges.update(FRAME_MS) {
                app.handle_command(command);
            }
            app.update();
        }
    }
}
