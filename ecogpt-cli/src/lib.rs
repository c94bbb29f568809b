//! # ecogpt-cli
//!
//! Command line host for the footprint monitor: argument parsing, env config, a line-based
//! capture source, terminal rendering, and the `watch` loop.

pub mod cli;
pub mod config;
pub mod line_capture;
pub mod render;
pub mod watch;

pub use cli::{Cli, Commands};
pub use config::AppConfig;
pub use line_capture::{parse_line, LineCapture};
pub use render::{render_profiles, TerminalRenderer};
pub use watch::run_watch;
