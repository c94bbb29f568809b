//! Replays a fixed list of capture events. Used by tests and one-shot estimates.

use async_trait::async_trait;
use ecogpt_core::{CaptureEvent, Result, TextCapture};
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ReplayCapture {
    events: Vec<CaptureEvent>,
}

impl ReplayCapture {
    pub fn new(events: Vec<CaptureEvent>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl TextCapture for ReplayCapture {
    async fn run(&self, events: mpsc::Sender<CaptureEvent>) -> Result<()> {
        for event in &self.events {
            if events.send(event.clone()).await.is_err() {
                debug!("Receiver closed, replay stopped early");
                break;
            }
        }
        Ok(())
    }
}
