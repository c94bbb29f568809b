//! Line-oriented capture source: each input line is a full text snapshot, except control lines.
//!
//! Control lines:
//! - `:focus <app>` - frontmost application changed
//! - `:model <name>` - model selected
//! - `:intensity <name>` - grid intensity selected
//! - `:clear` - text field emptied
//!
//! A snapshot that itself starts with `:` is written with a leading `::`, which is reduced to `:`.

use async_trait::async_trait;
use ecogpt_core::{CaptureEvent, EcoError, Result, TextCapture};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

/// Parses one input line into a capture event.
pub fn parse_line(line: &str) -> Result<CaptureEvent> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(CaptureEvent::text(line));
    };
    if command.starts_with(':') {
        return Ok(CaptureEvent::text(command));
    }
    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };
    match name {
        "focus" if !arg.is_empty() => Ok(CaptureEvent::focus(arg)),
        "model" => Ok(CaptureEvent::ModelSelected(arg.parse()?)),
        "intensity" => Ok(CaptureEvent::IntensitySelected(arg.parse()?)),
        "clear" => Ok(CaptureEvent::text("")),
        _ => Err(EcoError::Capture(format!("unknown control line: {}", line))),
    }
}

type BoxedReader = Box<dyn AsyncBufRead + Send + Unpin>;

/// Reads snapshots from any async line source (stdin in the CLI, byte slices in tests).
pub struct LineCapture {
    reader: Mutex<Option<BoxedReader>>,
}

impl LineCapture {
    pub fn new(reader: impl AsyncBufRead + Send + Unpin + 'static) -> Self {
        Self {
            reader: Mutex::new(Some(Box::new(reader))),
        }
    }

    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl TextCapture for LineCapture {
    /// Reads until EOF. Malformed control lines are logged and skipped. Can run once.
    async fn run(&self, events: mpsc::Sender<CaptureEvent>) -> Result<()> {
        let reader = self
            .reader
            .lock()
            .await
            .take()
            .ok_or_else(|| EcoError::Capture("line source already consumed".to_string()))?;
        let mut lines = reader.lines();
        let mut sent = 0usize;
        while let Some(line) = lines.next_line().await? {
            let event = match parse_line(&line) {
                Ok(event) => event,
                Err(e) => {
                    warn!(error = %e, "Skipping input line");
                    continue;
                }
            };
            if events.send(event).await.is_err() {
                debug!("Receiver closed, line capture stopped early");
                break;
            }
            sent += 1;
        }
        info!(events = sent, "step: line capture finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint::{GridIntensityProfile, ModelProfile};

    fn text_of(event: &CaptureEvent) -> Option<&str> {
        match event {
            CaptureEvent::TextChanged { text, .. } => Some(text),
            _ => None,
        }
    }

    #[test]
    fn test_parse_plain_text() {
        let event = parse_line("What is a lifetime?").unwrap();
        assert_eq!(text_of(&event), Some("What is a lifetime?"));
        assert_eq!(text_of(&parse_line("").unwrap()), Some(""));
    }

    #[test]
    fn test_parse_control_lines() {
        assert_eq!(parse_line(":focus ChatGPT").unwrap(), CaptureEvent::focus("ChatGPT"));
        assert_eq!(
            parse_line(":focus Google Chrome").unwrap(),
            CaptureEvent::focus("Google Chrome")
        );
        assert_eq!(
            parse_line(":model gpt-4o").unwrap(),
            CaptureEvent::ModelSelected(ModelProfile::Gpt4o)
        );
        assert_eq!(
            parse_line(":intensity conservative").unwrap(),
            CaptureEvent::IntensitySelected(GridIntensityProfile::Conservative)
        );
        assert_eq!(text_of(&parse_line(":clear").unwrap()), Some(""));
    }

    #[test]
    fn test_parse_escaped_colon_text() {
        assert_eq!(
            text_of(&parse_line("::focus on lifetimes").unwrap()),
            Some(":focus on lifetimes")
        );
        assert_eq!(text_of(&parse_line("::)").unwrap()), Some(":)"));
        assert_eq!(text_of(&parse_line(":::").unwrap()), Some("::"));
    }

    #[test]
    fn test_parse_invalid_control_lines() {
        assert!(matches!(parse_line(":model gpt-9"), Err(EcoError::Profile(_))));
        assert!(matches!(parse_line(":focus"), Err(EcoError::Capture(_))));
        assert!(matches!(parse_line(":rewind"), Err(EcoError::Capture(_))));
    }

    #[tokio::test]
    async fn test_run_sends_events_in_order() {
        let input: &'static [u8] = b":focus ChatGPT\r\nhello\r\n:model gpt9\n::)\nhello world\n";
        let capture = LineCapture::new(input);
        let (tx, mut rx) = mpsc::channel(8);

        capture.run(tx).await.unwrap();

        assert_eq!(rx.recv().await.unwrap(), CaptureEvent::focus("ChatGPT"));
        assert_eq!(text_of(&rx.recv().await.unwrap()), Some("hello"));
        assert_eq!(text_of(&rx.recv().await.unwrap()), Some(":)"));
        assert_eq!(text_of(&rx.recv().await.unwrap()), Some("hello world"));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_run_twice_fails() {
        let input: &'static [u8] = b"x\n";
        let capture = LineCapture::new(input);
        let (tx, _rx) = mpsc::channel(8);
        capture.run(tx.clone()).await.unwrap();
        assert!(capture.run(tx).await.is_err());
    }
}
