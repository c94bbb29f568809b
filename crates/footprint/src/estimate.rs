//! Estimator: text → tokens → energy (kWh) → CO₂ grams with a fixed error band.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::profile::{GridIntensityProfile, ModelProfile};

/// Average tokens per user-perceived character.
pub const TOKENS_PER_CHARACTER: f64 = 0.25;

/// Energy baseline per 1000 tokens for GPT-3, in kWh.
pub const BASE_KWH_PER_THOUSAND_TOKENS: f64 = 0.0002;

/// Uncertainty applied on both sides of the central value (±20%).
pub const ERROR_MARGIN: f64 = 0.20;

/// Estimated CO₂ emissions in grams, with lower and upper bounds.
///
/// Invariant: `lower_bound <= central_value <= upper_bound` (all values non-negative).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FootprintEstimate {
    pub central_value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

impl FootprintEstimate {
    /// Estimate of an empty prompt.
    pub const ZERO: FootprintEstimate = FootprintEstimate {
        central_value: 0.0,
        lower_bound: 0.0,
        upper_bound: 0.0,
    };

    /// Applies the fixed error margin around a central emission value.
    pub fn from_central(central_value: f64) -> Self {
        Self {
            central_value,
            lower_bound: central_value * (1.0 - ERROR_MARGIN),
            upper_bound: central_value * (1.0 + ERROR_MARGIN),
        }
    }

    /// Value used for every display, severity, and equivalence decision.
    pub fn representative_value(&self) -> f64 {
        self.central_value
    }
}

/// Number of extended grapheme clusters (what a user sees as characters).
pub fn character_count(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Heuristic token count: `floor(characters * 0.25)`. No tokenizer involved.
pub fn estimate_tokens(text: &str) -> u64 {
    (character_count(text) as f64 * TOKENS_PER_CHARACTER).floor() as u64
}

/// Energy drawn to process `tokens` on `model`, in kWh.
pub fn estimate_energy_kwh(tokens: u64, model: ModelProfile) -> f64 {
    let thousands_of_tokens = tokens as f64 / 1000.0;
    thousands_of_tokens * BASE_KWH_PER_THOUSAND_TOKENS * model.energy_multiplier()
}

/// Estimates the carbon footprint of a prompt.
///
/// Total over all inputs: empty text yields [`FootprintEstimate::ZERO`].
///
/// # Example
///
/// ```
/// use footprint::{estimate, GridIntensityProfile, ModelProfile};
///
/// let text = "a".repeat(400);
/// let e = estimate(&text, ModelProfile::Gpt3, GridIntensityProfile::Realistic);
/// assert!((e.central_value - 0.004).abs() < 1e-12);
/// ```
pub fn estimate(
    text: &str,
    model: ModelProfile,
    intensity: GridIntensityProfile,
) -> FootprintEstimate {
    let tokens = estimate_tokens(text);
    let energy_kwh = estimate_energy_kwh(tokens, model);
    FootprintEstimate::from_central(energy_kwh * intensity.grams_co2_per_kwh())
}
