//! Display state rendered by the host: emissions string, range, color, equivalence phrase.

use footprint::{
    equivalence_phrase, estimate, estimate_tokens, format_magnitude, format_range, severity_band,
    FootprintEstimate, GridIntensityProfile, ModelProfile, SeverityBand, IDLE_COLOR,
};
use serde::Serialize;

/// Emissions string shown when nothing is being measured.
pub const IDLE_EMISSIONS: &str = "0.0g";

/// Equivalence text shown when nothing is being measured.
pub const IDLE_EQUIVALENT: &str = "N/A";

/// Everything the host needs to draw one update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactView {
    /// Target app is frontmost (or focus is not required).
    pub active: bool,
    /// The current snapshot is non-empty.
    pub text_captured: bool,
    pub model: ModelProfile,
    pub intensity: GridIntensityProfile,
    pub estimated_tokens: u64,
    pub estimate: FootprintEstimate,
    /// Formatted central value, e.g. `"4.0mg"`.
    pub emissions: String,
    pub lower: String,
    pub upper: String,
    /// `None` while idle.
    pub severity: Option<SeverityBand>,
    pub color: String,
    pub equivalent: String,
}

impl ImpactView {
    /// Target app not focused: zero values, gray, no equivalent.
    pub fn idle(model: ModelProfile, intensity: GridIntensityProfile) -> Self {
        Self {
            active: false,
            text_captured: false,
            model,
            intensity,
            estimated_tokens: 0,
            estimate: FootprintEstimate::ZERO,
            emissions: IDLE_EMISSIONS.to_string(),
            lower: IDLE_EMISSIONS.to_string(),
            upper: IDLE_EMISSIONS.to_string(),
            severity: None,
            color: IDLE_COLOR.to_string(),
            equivalent: IDLE_EQUIVALENT.to_string(),
        }
    }

    /// Target app focused but no text captured yet.
    pub fn awaiting_text(model: ModelProfile, intensity: GridIntensityProfile) -> Self {
        Self {
            active: true,
            ..Self::idle(model, intensity)
        }
    }

    /// Runs the estimator and presentation mapping for `text`.
    pub fn from_text(text: &str, model: ModelProfile, intensity: GridIntensityProfile) -> Self {
        let estimate = estimate(text, model, intensity);
        let grams = estimate.representative_value();
        let (lower, upper) = format_range(&estimate);
        let severity = severity_band(grams);
        Self {
            active: true,
            text_captured: !text.is_empty(),
            model,
            intensity,
            estimated_tokens: estimate_tokens(text),
            estimate,
            emissions: format_magnitude(grams),
            lower,
            upper,
            severity: Some(severity),
            color: severity.color().to_string(),
            equivalent: equivalence_phrase(grams).to_string(),
        }
    }

    /// One-line rendering, e.g. `4.0mg CO₂ (3.2mg - 4.8mg) [green] Sending a simple email`.
    pub fn summary(&self) -> String {
        format!(
            "{} CO₂ ({} - {}) [{}] {}",
            self.emissions, self.lower, self.upper, self.color, self.equivalent
        )
    }
}
