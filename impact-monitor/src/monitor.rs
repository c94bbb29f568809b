//! Impact monitor: applies capture events in order, recomputes the view, and fans it out.
//!
//! State is the focus flag, the last captured text, and the selected model and intensity.
//! Every call to the estimator is independent; nothing is cached between events.

use std::sync::Arc;

use ecogpt_core::{CaptureEvent, EcoError, Result, TextCapture};
use footprint::{GridIntensityProfile, ModelProfile};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

use crate::view::ImpactView;

/// Application whose text field is watched by default.
pub const DEFAULT_TARGET_APP: &str = "ChatGPT";

/// Default capacity of the capture event channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Receives every published view (e.g. a terminal renderer or a menu bar label).
pub trait ImpactObserver: Send + Sync {
    fn on_impact(&self, view: &ImpactView);
}

#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Frontmost app name that activates the monitor.
    pub target_app: String,
    pub model: ModelProfile,
    pub intensity: GridIntensityProfile,
    /// When false the monitor starts active and text is accepted before any focus event.
    pub require_focus: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            target_app: DEFAULT_TARGET_APP.to_string(),
            model: ModelProfile::default(),
            intensity: GridIntensityProfile::default(),
            require_focus: true,
        }
    }
}

pub struct ImpactMonitor {
    target_app: String,
    active: bool,
    last_text: Option<String>,
    model: ModelProfile,
    intensity: GridIntensityProfile,
    observers: Vec<Arc<dyn ImpactObserver>>,
    view_tx: watch::Sender<ImpactView>,
}

impl ImpactMonitor {
    pub fn new(config: MonitorConfig) -> Self {
        let active = !config.require_focus;
        let initial = if active {
            ImpactView::awaiting_text(config.model, config.intensity)
        } else {
            ImpactView::idle(config.model, config.intensity)
        };
        let (view_tx, _) = watch::channel(initial);
        Self {
            target_app: config.target_app,
            active,
            last_text: None,
            model: config.model,
            intensity: config.intensity,
            observers: Vec::new(),
            view_tx,
        }
    }

    /// Appends an observer, notified after every published view.
    pub fn add_observer(mut self, observer: Arc<dyn ImpactObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Latest-value subscription to the published view.
    pub fn subscribe(&self) -> watch::Receiver<ImpactView> {
        self.view_tx.subscribe()
    }

    pub fn current(&self) -> ImpactView {
        self.view_tx.borrow().clone()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    pub fn model(&self) -> ModelProfile {
        self.model
    }

    pub fn intensity(&self) -> GridIntensityProfile {
        self.intensity
    }

    /// View for the current state, ignoring what was last published.
    fn compute_view(&self) -> ImpactView {
        if !self.active {
            return ImpactView::idle(self.model, self.intensity);
        }
        match &self.last_text {
            Some(text) => ImpactView::from_text(text, self.model, self.intensity),
            None => ImpactView::awaiting_text(self.model, self.intensity),
        }
    }

    /// Applies one event to the state. Returns the new view when the event changes what is shown.
    pub fn apply(&mut self, event: CaptureEvent) -> Option<ImpactView> {
        match event {
            CaptureEvent::FocusChanged { app_name } => {
                let now_active = app_name == self.target_app;
                if now_active == self.active {
                    debug!(app = %app_name, active = self.active, "Focus unchanged");
                    return None;
                }
                self.active = now_active;
                info!(app = %app_name, active = now_active, "step: focus changed");
                Some(self.compute_view())
            }
            CaptureEvent::TextChanged { text, captured_at } => {
                if !self.active {
                    debug!(
                        text_len = text.len(),
                        target_app = %self.target_app,
                        "Text ignored, target app not active"
                    );
                    return None;
                }
                debug!(text_len = text.len(), captured_at = %captured_at, "step: text captured");
                self.last_text = Some(text);
                Some(self.compute_view())
            }
            CaptureEvent::ModelSelected(model) => {
                info!(model = %model, "step: model selected");
                self.model = model;
                Some(self.compute_view())
            }
            CaptureEvent::IntensitySelected(intensity) => {
                info!(intensity = %intensity, "step: intensity selected");
                self.intensity = intensity;
                Some(self.compute_view())
            }
        }
    }

    fn publish(&self, view: &ImpactView) {
        info!(
            active = view.active,
            emissions = %view.emissions,
            color = %view.color,
            tokens = view.estimated_tokens,
            "step: impact published"
        );
        self.view_tx.send_replace(view.clone());
        for observer in &self.observers {
            observer.on_impact(view);
        }
    }

    /// Applies `event` and publishes the resulting view, if any.
    pub fn handle(&mut self, event: CaptureEvent) -> Option<ImpactView> {
        let kind = event.kind();
        let view = self.apply(event);
        match &view {
            Some(v) => self.publish(v),
            None => debug!(event = kind, "No view change"),
        }
        view
    }

    /// Drains `events` until every sender is dropped. Returns the last published view.
    #[instrument(skip(self, events), fields(target_app = %self.target_app))]
    pub async fn run(mut self, mut events: mpsc::Receiver<CaptureEvent>) -> ImpactView {
        info!("step: impact monitor started");
        let mut handled = 0usize;
        while let Some(event) = events.recv().await {
            self.handle(event);
            handled += 1;
        }
        info!(events = handled, "step: impact monitor finished");
        self.current()
    }

    /// Runs `source` on its own task feeding a bounded channel, and this monitor on the current one.
    ///
    /// Source errors are returned after the monitor has drained everything sent before the failure.
    pub async fn run_with_source(
        self,
        source: Arc<dyn TextCapture>,
        capacity: usize,
    ) -> Result<ImpactView> {
        if capacity == 0 {
            return Err(EcoError::Config(
                "event channel capacity must be greater than zero".to_string(),
            ));
        }
        let (tx, rx) = mpsc::channel(capacity);
        let source_task = tokio::spawn(async move { source.run(tx).await });
        let view = self.run(rx).await;
        match source_task.await {
            Ok(Ok(())) => Ok(view),
            Ok(Err(e)) => {
                warn!(error = %e, "Capture source failed");
                Err(e)
            }
            Err(e) => Err(EcoError::Capture(format!("capture task panicked: {}", e))),
        }
    }
}
