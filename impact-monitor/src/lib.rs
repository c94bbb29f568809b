//! # Impact monitor
//!
//! Consumes [`ecogpt_core::CaptureEvent`]s from a channel, keeps the last captured text and the
//! current model/intensity selection, and republishes an [`ImpactView`] whenever what should be
//! shown changes. Views fan out through a `tokio::sync::watch` channel (latest value wins) and to
//! registered [`ImpactObserver`]s.
//!
//! Focus rules: text is only measured while the target app (default "ChatGPT") is frontmost;
//! losing focus shows the idle view, regaining it re-estimates the last text.

mod monitor;
mod replay;
mod view;

pub use monitor::{
    ImpactMonitor, ImpactObserver, MonitorConfig, DEFAULT_CHANNEL_CAPACITY, DEFAULT_TARGET_APP,
};
pub use replay::ReplayCapture;
pub use view::{ImpactView, IDLE_EMISSIONS, IDLE_EQUIVALENT};
