//! ecogpt CLI: estimate a prompt, watch a stream of snapshots, list profiles, run the toy tokenizer.
//! Config from env (`.env` supported) with CLI overrides.

use std::io::{self, Read};
use std::sync::Arc;

use anyhow::{Context, Result};
use bpe_tokenizer::BpeTokenizer;
use clap::Parser;
use ecogpt_cli::{render_profiles, run_watch, AppConfig, Cli, Commands, LineCapture, TerminalRenderer};
use ecogpt_core::{init_console_tracing, init_tracing};
use footprint::{estimate_tokens, explanation, GridIntensityProfile, ModelProfile};
use impact_monitor::ImpactView;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Load config from env (ECOGPT_*, LOG_FILE)")?;
    config.validate()?;

    match cli.command {
        Commands::Estimate {
            text,
            model,
            intensity,
            json,
        } => {
            init_console_tracing()?;
            handle_estimate(config, text, model, intensity, json)
        }
        Commands::Watch {
            model,
            intensity,
            no_focus,
        } => {
            init_tracing(&config.log_file)?;
            handle_watch(config.with_selection(model, intensity), !no_focus).await
        }
        Commands::Models => {
            print!("{}", render_profiles());
            Ok(())
        }
        Commands::Tokens { text } => handle_tokens(text),
        Commands::Explain => {
            println!("{}", explanation());
            Ok(())
        }
    }
}

/// Returns `text`, or all of stdin without its trailing newline.
fn text_or_stdin(text: Option<String>) -> Result<String> {
    if let Some(t) = text {
        return Ok(t);
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Read prompt from stdin")?;
    let trimmed = buf
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&buf);
    Ok(trimmed.to_string())
}

fn handle_estimate(
    config: AppConfig,
    text: Option<String>,
    model: Option<ModelProfile>,
    intensity: Option<GridIntensityProfile>,
    json: bool,
) -> Result<()> {
    let config = config.with_selection(model, intensity);
    let text = text_or_stdin(text)?;
    let view = ImpactView::from_text(&text, config.model, config.intensity);

    info!(
        model = %config.model,
        intensity = %config.intensity,
        tokens = view.estimated_tokens,
        emissions = %view.emissions,
        "Estimated prompt"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        let renderer = TerminalRenderer::new(config.target_app.clone(), false);
        print!("{}", renderer.render(&view));
    }
    Ok(())
}

async fn handle_watch(config: AppConfig, require_focus: bool) -> Result<()> {
    if require_focus {
        eprintln!(
            "Waiting for `:focus {}`; each other line is a text snapshot.",
            config.target_app
        );
    }
    let source = Arc::new(LineCapture::stdin());
    run_watch(&config, source, require_focus, io::stdout()).await?;
    Ok(())
}

fn handle_tokens(text: Option<String>) -> Result<()> {
    let text = text_or_stdin(text)?;
    let tokenizer = BpeTokenizer::new();
    let ids = tokenizer.tokenize(&text);

    println!("BPE tokens (illustrative): {}", ids.len());
    println!("Heuristic tokens (used for estimates): {}", estimate_tokens(&text));
    println!("Ids: {:?}", ids);
    Ok(())
}
