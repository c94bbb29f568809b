//! # Footprint
//!
//! Estimates the carbon footprint of a ChatGPT prompt and maps it to display artifacts.
//!
//! ## Pipeline
//!
//! - **Tokens**: `floor(characters * 0.25)`, counting user-perceived characters
//! - **Energy**: `tokens / 1000 * 0.0002 kWh * model multiplier`
//! - **Emissions**: `energy * grid intensity (gCO₂/kWh)`, with a ±20% band
//! - **Display**: magnitude string, severity band (green/yellow/red), equivalence phrase
//!
//! ## Usage
//!
//! Used by `impact-monitor` on every captured text change, and directly by the `ecogpt estimate`
//! command. Every function here is pure: no I/O, no shared state, safe from any thread.
//!
//! ## External interactions
//!
//! None.

pub mod estimate;
pub mod presentation;
pub mod profile;

pub use estimate::{
    character_count, estimate, estimate_energy_kwh, estimate_tokens, FootprintEstimate,
    BASE_KWH_PER_THOUSAND_TOKENS, ERROR_MARGIN, TOKENS_PER_CHARACTER,
};
pub use presentation::{
    equivalence_phrase, explanation, format_magnitude, format_range, severity_band, SeverityBand,
    IDLE_COLOR, MILLIGRAM_THRESHOLD,
};
pub use profile::{
    GridIntensityProfile, IntensitySpec, ModelProfile, ModelSpec, ParseProfileError,
};
