//! # ecogpt-core
//!
//! Shared pieces for the footprint monitor: error types, tracing initialization, and the capture
//! boundary ([`CaptureEvent`], [`TextCapture`]). Transport-agnostic; used by impact-monitor and
//! ecogpt-cli.

pub mod capture;
pub mod error;
pub mod logger;

pub use capture::{CaptureEvent, TextCapture};
pub use error::{EcoError, Result};
pub use logger::{init_console_tracing, init_tracing};
