//! Capture boundary: events produced by whatever watches the user's input, and the source trait.
//!
//! [`TextCapture`] is transport-agnostic; a platform observer, stdin, or a replay list all feed
//! the same channel, so the estimator never depends on a platform notification mechanism.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use footprint::{GridIntensityProfile, ModelProfile};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::Result;

/// One observed change, delivered in the order the underlying input changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CaptureEvent {
    /// Full contents of the focused text field after a change (possibly empty).
    TextChanged {
        text: String,
        captured_at: DateTime<Utc>,
    },
    /// The frontmost application changed.
    FocusChanged { app_name: String },
    /// The user picked another model.
    ModelSelected(ModelProfile),
    /// The user picked another grid intensity.
    IntensitySelected(GridIntensityProfile),
}

impl CaptureEvent {
    /// Text snapshot stamped with the current time.
    pub fn text(text: impl Into<String>) -> Self {
        CaptureEvent::TextChanged {
            text: text.into(),
            captured_at: Utc::now(),
        }
    }

    pub fn focus(app_name: impl Into<String>) -> Self {
        CaptureEvent::FocusChanged {
            app_name: app_name.into(),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CaptureEvent::TextChanged { .. } => "text_changed",
            CaptureEvent::FocusChanged { .. } => "focus_changed",
            CaptureEvent::ModelSelected(_) => "model_selected",
            CaptureEvent::IntensitySelected(_) => "intensity_selected",
        }
    }
}

/// A source of capture events (platform observer, stdin, replay list).
#[async_trait]
pub trait TextCapture: Send + Sync {
    /// Sends events until the source is exhausted. A closed receiver ends the source early
    /// and is not an error.
    async fn run(&self, events: mpsc::Sender<CaptureEvent>) -> Result<()>;
}
