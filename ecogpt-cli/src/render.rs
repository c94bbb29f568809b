//! Terminal rendering of [`ImpactView`]s, laid out like the menu bar popover.

use footprint::{GridIntensityProfile, ModelProfile};
use impact_monitor::ImpactView;

#[derive(Debug, Clone)]
pub struct TerminalRenderer {
    target_app: String,
    /// Print the compact `[EcoGPT] 4.0mg` label line first.
    show_label: bool,
}

impl TerminalRenderer {
    pub fn new(target_app: impl Into<String>, show_label: bool) -> Self {
        Self {
            target_app: target_app.into(),
            show_label,
        }
    }

    /// Compact label, the terminal counterpart of the menu bar title.
    pub fn label(view: &ImpactView) -> String {
        format!("[EcoGPT] {}", view.emissions)
    }

    pub fn render(&self, view: &ImpactView) -> String {
        let mut out = String::new();
        if self.show_label {
            out.push_str(&Self::label(view));
            out.push('\n');
        }
        if !view.active {
            out.push_str(&format!("{} Not Active [{}]\n", self.target_app, view.color));
            out.push_str(&format!(
                "  Please open {} to start monitoring the estimated carbon footprint of your prompts.\n",
                self.target_app
            ));
            return out;
        }
        out.push_str(&format!(
            "Estimated Impact: {} CO₂ [{}]\n",
            view.emissions, view.color
        ));
        if view.text_captured {
            out.push_str(&format!("  Range: {} - {}\n", view.lower, view.upper));
            out.push_str(&format!("  Equivalent to: {}\n", view.equivalent));
        } else {
            out.push_str("  Type a prompt to see impact\n");
        }
        out.push_str(&format!(
            "  Model: {} | Emission Intensity: {} | Tokens: {}\n",
            view.model, view.intensity, view.estimated_tokens
        ));
        out
    }
}

/// Table of every model and intensity with their factors.
pub fn render_profiles() -> String {
    let mut out = String::from("Models (energy relative to GPT-3):\n");
    for model in ModelProfile::ALL {
        out.push_str(&format!(
            "  {:<12} {:<14} x{}\n",
            model.id(),
            model.display_name(),
            model.energy_multiplier()
        ));
    }
    out.push_str("Emission intensities:\n");
    for intensity in GridIntensityProfile::ALL {
        out.push_str(&format!(
            "  {:<12} {:<14} {} gCO2/kWh\n",
            intensity.id(),
            intensity.display_name(),
            intensity.grams_co2_per_kwh()
        ));
    }
    out
}
