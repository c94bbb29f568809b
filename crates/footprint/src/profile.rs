//! Model and grid-intensity profiles: closed tag enums backed by static record tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a model or intensity name does not match any profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseProfileError {
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    #[error("Unknown emission intensity: {0}")]
    UnknownIntensity(String),
}

/// Immutable constants attached to a [`ModelProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelSpec {
    /// Stable identifier used in config and on the command line.
    pub id: &'static str,
    pub display_name: &'static str,
    /// Inference energy relative to the GPT-3 baseline (1.0).
    pub energy_multiplier: f64,
}

/// Immutable constants attached to a [`GridIntensityProfile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensitySpec {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Emission factor of the assumed grid mix (gCO₂/kWh).
    pub grams_co2_per_kwh: f64,
}

/// GPT model the prompt is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModelProfile {
    #[serde(rename = "gpt3")]
    Gpt3,
    #[serde(rename = "gpt35turbo")]
    Gpt35Turbo,
    #[default]
    #[serde(rename = "gpt4")]
    Gpt4,
    #[serde(rename = "gpt4turbo")]
    Gpt4Turbo,
    #[serde(rename = "gpt4o")]
    Gpt4o,
    #[serde(rename = "gpt4o_mini")]
    Gpt4oMini,
}

// Indexed by ModelProfile discriminant; keep in variant order.
const MODEL_SPECS: [ModelSpec; 6] = [
    ModelSpec {
        id: "gpt3",
        display_name: "GPT-3",
        energy_multiplier: 1.0,
    },
    ModelSpec {
        id: "gpt35turbo",
        display_name: "GPT-3.5 Turbo",
        energy_multiplier: 0.7,
    },
    ModelSpec {
        id: "gpt4",
        display_name: "GPT-4",
        energy_multiplier: 4.0,
    },
    ModelSpec {
        id: "gpt4turbo",
        display_name: "GPT-4 Turbo",
        energy_multiplier: 1.5,
    },
    ModelSpec {
        id: "gpt4o",
        display_name: "GPT-4o",
        energy_multiplier: 0.75,
    },
    ModelSpec {
        id: "gpt4o_mini",
        display_name: "GPT-4o Mini",
        energy_multiplier: 0.3,
    },
];

impl ModelProfile {
    /// Every model, in menu order.
    pub const ALL: [ModelProfile; 6] = [
        ModelProfile::Gpt3,
        ModelProfile::Gpt35Turbo,
        ModelProfile::Gpt4,
        ModelProfile::Gpt4Turbo,
        ModelProfile::Gpt4o,
        ModelProfile::Gpt4oMini,
    ];

    pub fn spec(self) -> &'static ModelSpec {
        &MODEL_SPECS[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }

    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }

    pub fn energy_multiplier(self) -> f64 {
        self.spec().energy_multiplier
    }
}

impl fmt::Display for ModelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Lowercases and strips separators so "GPT-4o Mini", "gpt4o_mini" and "gpt-4o-mini" compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | '.' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for ModelProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s.trim());
        ModelProfile::ALL
            .into_iter()
            .find(|m| normalize(m.id()) == wanted || normalize(m.display_name()) == wanted)
            .ok_or_else(|| ParseProfileError::UnknownModel(s.to_string()))
    }
}

/// Assumed carbon intensity of the electricity powering inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridIntensityProfile {
    /// Greener, renewables-heavy data center mix.
    #[default]
    Realistic,
    /// Fossil-heavy world-average mix.
    Conservative,
}

const INTENSITY_SPECS: [IntensitySpec; 2] = [
    IntensitySpec {
        id: "realistic",
        display_name: "Realistic",
        grams_co2_per_kwh: 200.0,
    },
    IntensitySpec {
        id: "conservative",
        display_name: "Conservative",
        grams_co2_per_kwh: 400.0,
    },
];

impl GridIntensityProfile {
    pub const ALL: [GridIntensityProfile; 2] = [
        GridIntensityProfile::Realistic,
        GridIntensityProfile::Conservative,
    ];

    pub fn spec(self) -> &'static IntensitySpec {
        &INTENSITY_SPECS[self as usize]
    }

    pub fn id(self) -> &'static str {
        self.spec().id
    }

    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }

    pub fn grams_co2_per_kwh(self) -> f64 {
        self.spec().grams_co2_per_kwh
    }
}

impl fmt::Display for GridIntensityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for GridIntensityProfile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        GridIntensityProfile::ALL
            .into_iter()
            .find(|i| i.id() == wanted)
            .ok_or_else(|| ParseProfileError::UnknownIntensity(s.to_string()))
    }
}
