//! Headless simulation: `lumines-sim [frames] [seed] [script]`.
//!
//! Plays an input script for the given number of frames and prints the
//! final snapshot as JSON. `script` is a comma-separated list of command
//! names (e.g. `moveLeft,rotateCw,slam,slamReleased`).

use anyhow::{Context, Result};
use log::info;

use lumines_tui::core::GameSession;
use lumines_tui::types::Command;
use lumines_tui::{logging, Config};

const DEFAULT_FRAMES: u64 = 3600;

/// Default commands fed one per `SCRIPT_STRIDE` frames, cycling.
const SCRIPT: [Command; 6] = [
    Command::MoveLeft,
    Command::RotateCw,
    Command::SlamPressed,
    Command::SlamReleased,
    Command::MoveRight,
    Command::MoveRight,
];
const SCRIPT_STRIDE: u64 = 20;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_level, config.log_path.as_deref())?;

    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(v) => v.parse().with_context(|| format!("invalid frame count {v:?}"))?,
        None => DEFAULT_FRAMES,
    };
    let seed = match args.next() {
        Some(v) => v.parse().with_context(|| format!("invalid seed {v:?}"))?,
        None => config.seed,
    };

    let commands = match args.next() {
        Some(v) => parse_script(&v)?,
        None => SCRIPT.to_vec(),
    };

    let mut session = GameSession::new(seed);
    let mut script = commands.iter().cycle();
    for frame in 0..frames {
        if session.is_over() {
            break;
        }
        if frame % SCRIPT_STRIDE == 0 {
            if let Some(&command) = script.next() {
                session.apply_command(command);
            }
        }
        session.update();
    }
    info!(
        "simulated {} frames, score {}",
        session.frame(),
        session.score()
    );

    let json = serde_json::to_string_pretty(&session.snapshot())?;
    println!("{json}");
    Ok(())
}

fn parse_script(s: &str) -> Result<Vec<Command>> {
    let script = s
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Command::from_str(name).with_context(|| format!("unknown command {name:?}")))
        .collect::<Result<Vec<_>>>()?;
    if script.is_empty() {
        anyhow::bail!("empty script");
    }
    Ok(script)
}
