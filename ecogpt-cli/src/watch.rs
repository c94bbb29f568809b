//! `watch` command: runs a capture source through the impact monitor and renders each change.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use ecogpt_core::TextCapture;
use impact_monitor::{ImpactMonitor, ImpactView};
use tokio::time::Instant;
use tracing::{info, instrument};

use crate::config::AppConfig;
use crate::render::TerminalRenderer;

/// Runs `source` to exhaustion, writing rendered views to `out`, and returns the final view
/// together with the writer.
///
/// With auto update on, every change is rendered, at most once per update interval (the latest
/// view wins). With auto update off, only the final view is rendered.
#[instrument(skip(config, source, out), fields(model = %config.model, intensity = %config.intensity))]
pub async fn run_watch<W>(
    config: &AppConfig,
    source: Arc<dyn TextCapture>,
    require_focus: bool,
    out: W,
) -> Result<(ImpactView, W)>
where
    W: Write + Send + 'static,
{
    let monitor = ImpactMonitor::new(config.monitor_config(require_focus));
    let renderer = TerminalRenderer::new(config.target_app.clone(), config.show_in_menu_bar);
    let mut rx = monitor.subscribe();
    let auto_update = config.auto_update;
    let interval = Duration::from_secs(config.update_interval_secs);

    info!(auto_update, interval_secs = config.update_interval_secs, "step: watch started");

    let render_renderer = renderer.clone();
    let render_task = tokio::spawn(async move {
        let mut out = out;
        if !auto_update {
            return Ok::<W, std::io::Error>(out);
        }
        let initial = rx.borrow_and_update().clone();
        writeln!(out, "{}", render_renderer.render(&initial))?;
        out.flush()?;
        let mut last_render = Instant::now();
        while rx.changed().await.is_ok() {
            let since = last_render.elapsed();
            if since < interval {
                tokio::time::sleep(interval - since).await;
            }
            let view = rx.borrow_and_update().clone();
            writeln!(out, "{}", render_renderer.render(&view))?;
            out.flush()?;
            last_render = Instant::now();
        }
        Ok(out)
    });

    let monitor_result = monitor
        .run_with_source(source, config.channel_capacity)
        .await;
    let mut out = render_task
        .await
        .context("render task panicked")?
        .context("write rendered view")?;
    let final_view = monitor_result.context("capture source failed")?;

    if !auto_update {
        writeln!(out, "{}", renderer.render(&final_view)).context("write rendered view")?;
        out.flush()?;
    }

    info!(emissions = %final_view.emissions, "step: watch finished");
    Ok((final_view, out))
}
