//! Presentation mapping: magnitude strings, severity bands, and equivalence phrases.
//!
//! All functions take grams of CO₂ (normally [`FootprintEstimate::representative_value`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::estimate::FootprintEstimate;

/// Values strictly below this are shown in milligrams.
pub const MILLIGRAM_THRESHOLD: f64 = 0.01;

/// Color shown when there is no estimate (target app not focused).
pub const IDLE_COLOR: &str = "gray";

/// Formats grams as `"4.0mg"` below [`MILLIGRAM_THRESHOLD`], otherwise as `"0.32g"`.
pub fn format_magnitude(grams: f64) -> String {
    if grams < MILLIGRAM_THRESHOLD {
        format!("{:.1}mg", grams * 1000.0)
    } else {
        format!("{:.2}g", grams)
    }
}

/// Formats lower and upper bounds. Each bound picks its own unit.
pub fn format_range(estimate: &FootprintEstimate) -> (String, String) {
    (
        format_magnitude(estimate.lower_bound),
        format_magnitude(estimate.upper_bound),
    )
}

/// Qualitative severity of an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityBand {
    Low,
    Medium,
    High,
}

impl SeverityBand {
    pub fn color(self) -> &'static str {
        match self {
            SeverityBand::Low => "green",
            SeverityBand::Medium => "yellow",
            SeverityBand::High => "red",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeverityBand::Low => "low",
            SeverityBand::Medium => "medium",
            SeverityBand::High => "high",
        };
        f.write_str(label)
    }
}

/// `< 0.1` low, `[0.1, 0.5)` medium, `>= 0.5` high.
pub fn severity_band(grams: f64) -> SeverityBand {
    if grams < 0.1 {
        SeverityBand::Low
    } else if grams < 0.5 {
        SeverityBand::Medium
    } else {
        SeverityBand::High
    }
}

/// Upper bounds (exclusive) in ascending order; the first match wins.
const EQUIVALENTS: [(f64, &str); 8] = [
    (0.10, "Sending a simple email"),
    (0.20, "Google search (1-2 queries)"),
    (0.30, "Sending an email with a small attachment"),
    (0.50, "Watching 1 minute of streaming video (SD)"),
    (0.70, "Watching 1 minute of streaming video (HD)"),
    (1.00, "Sending 1 minute of video via email"),
    (2.00, "Watching 10 minutes of streaming video (HD)"),
    (5.00, "Watching 1 hour of streaming video (HD)"),
];

const LARGEST_EQUIVALENT: &str = "Electricity for 1 hour of room lighting with an incandescent bulb";

/// Everyday activity with a comparable footprint.
pub fn equivalence_phrase(grams: f64) -> &'static str {
    EQUIVALENTS
        .iter()
        .find(|(upper, _)| grams < *upper)
        .map(|(_, phrase)| *phrase)
        .unwrap_or(LARGEST_EQUIVALENT)
}

/// Methodology shown by the `explain` command.
pub fn explanation() -> &'static str {
    "How We Estimate Your Carbon Footprint

Footprint Estimation
EcoGPT estimates the carbon footprint of your ChatGPT prompts based on:

  - The number of tokens in your prompt (about one token per four characters)
  - The AI model you're using (relative energy cost versus GPT-3)
  - The energy consumption of data centers (0.0002 kWh per 1000 tokens for GPT-3)
  - The carbon intensity of the electricity grid

Every estimate carries a +/-20% uncertainty band.

Emission Intensity
Emission intensity refers to how we account for the carbon intensity of the electricity grid:

  - Realistic: 200 gCO2/kWh, a renewables-heavy data center mix
  - Conservative: 400 gCO2/kWh, a fossil-heavy world average

Choose 'Realistic' for everyday use, and 'Conservative' when you want to be extra cautious about your environmental impact."
}
