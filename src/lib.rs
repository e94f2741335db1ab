//! Lumines-style puzzle (workspace facade crate).
//!
//! The simulation, input mapping and terminal renderer live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `lumines_tui::{core,input,term,types}` and adds the runtime glue shared by
//! the binaries.

pub mod config;
pub mod logging;

pub use lumines_core as core;
pub use lumines_input as input;
pub use lumines_term as term;
pub use lumines_types as types;

pub use config::{Config, ConfigError};
