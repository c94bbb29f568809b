//! CLI parser.

use clap::{Parser, Subcommand};
use footprint::{GridIntensityProfile, ModelProfile};

#[derive(Parser)]
#[command(name = "ecogpt")]
#[command(about = "Estimate the carbon footprint of ChatGPT prompts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate one prompt (TEXT, or all of stdin when omitted).
    Estimate {
        text: Option<String>,
        /// Model (overrides ECOGPT_MODEL), e.g. gpt4, gpt-4o-mini.
        #[arg(short, long)]
        model: Option<ModelProfile>,
        /// Emission intensity (overrides ECOGPT_INTENSITY): realistic or conservative.
        #[arg(short, long)]
        intensity: Option<GridIntensityProfile>,
        /// Print the view as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Treat each stdin line as a text snapshot and show the impact as it changes.
    /// Control lines: `:focus <app>`, `:model <m>`, `:intensity <i>`, `:clear`.
    /// Start a line with `::` to send text that begins with `:`.
    Watch {
        #[arg(short, long)]
        model: Option<ModelProfile>,
        #[arg(short, long)]
        intensity: Option<GridIntensityProfile>,
        /// Measure immediately instead of waiting for `:focus <target app>`.
        #[arg(long)]
        no_focus: bool,
    },
    /// List models and emission intensities with their factors.
    Models,
    /// Run the illustrative BPE tokenizer (not used for estimates).
    Tokens { text: Option<String> },
    /// Explain how the footprint is estimated.
    Explain,
}
