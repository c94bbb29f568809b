//! AppConfig: selection defaults, focus target, refresh behavior, and logging. Loaded from env.

use anyhow::{Context, Result};
use footprint::{GridIntensityProfile, ModelProfile};
use impact_monitor::{MonitorConfig, DEFAULT_CHANNEL_CAPACITY, DEFAULT_TARGET_APP};
use std::env;

/// Accepted range for ECOGPT_UPDATE_INTERVAL_SECS.
pub const UPDATE_INTERVAL_RANGE: std::ops::RangeInclusive<u64> = 1..=60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// ECOGPT_MODEL
    pub model: ModelProfile,
    /// ECOGPT_INTENSITY
    pub intensity: GridIntensityProfile,
    /// ECOGPT_TARGET_APP: frontmost app that activates measuring
    pub target_app: String,
    /// ECOGPT_AUTO_UPDATE: render every change (true) or only the final view (false)
    pub auto_update: bool,
    /// ECOGPT_UPDATE_INTERVAL_SECS: min seconds between renders when auto updating
    pub update_interval_secs: u64,
    /// ECOGPT_SHOW_IN_MENU_BAR: print the compact emissions label before each view
    pub show_in_menu_bar: bool,
    /// ECOGPT_CHANNEL_CAPACITY: capture event channel size
    pub channel_capacity: usize,
    /// LOG_FILE
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: ModelProfile::default(),
            intensity: GridIntensityProfile::default(),
            target_app: DEFAULT_TARGET_APP.to_string(),
            auto_update: true,
            update_interval_secs: 5,
            show_in_menu_bar: true,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_file: "logs/ecogpt.log".to_string(),
        }
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("{} must be a boolean (true/false), got: {}", name, value),
    }
}

fn env_bool(name: &str, default: bool) -> Result<bool> {
    match env::var(name) {
        Ok(v) => parse_bool(name, &v),
        Err(_) => Ok(default),
    }
}

fn env_number<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(v) => v
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a non-negative integer, got: {}", name, v)),
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Load from environment variables. Unset variables keep their defaults; malformed ones fail.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let model = match env::var("ECOGPT_MODEL") {
            Ok(v) => v.parse::<ModelProfile>().context("ECOGPT_MODEL")?,
            Err(_) => defaults.model,
        };
        let intensity = match env::var("ECOGPT_INTENSITY") {
            Ok(v) => v.parse::<GridIntensityProfile>().context("ECOGPT_INTENSITY")?,
            Err(_) => defaults.intensity,
        };
        let target_app = env::var("ECOGPT_TARGET_APP")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.target_app);
        let auto_update = env_bool("ECOGPT_AUTO_UPDATE", defaults.auto_update)?;
        let update_interval_secs =
            env_number("ECOGPT_UPDATE_INTERVAL_SECS", defaults.update_interval_secs)?;
        let show_in_menu_bar = env_bool("ECOGPT_SHOW_IN_MENU_BAR", defaults.show_in_menu_bar)?;
        let channel_capacity = env_number("ECOGPT_CHANNEL_CAPACITY", defaults.channel_capacity)?;
        let log_file = env::var("LOG_FILE").unwrap_or(defaults.log_file);

        Ok(Self {
            model,
            intensity,
            target_app,
            auto_update,
            update_interval_secs,
            show_in_menu_bar,
            channel_capacity,
            log_file,
        })
    }

    /// Validate config. Call after load() to fail fast before running.
    pub fn validate(&self) -> Result<()> {
        if !UPDATE_INTERVAL_RANGE.contains(&self.update_interval_secs) {
            anyhow::bail!(
                "ECOGPT_UPDATE_INTERVAL_SECS must be between {} and {}, got: {}",
                UPDATE_INTERVAL_RANGE.start(),
                UPDATE_INTERVAL_RANGE.end(),
                self.update_interval_secs
            );
        }
        if self.channel_capacity == 0 {
            anyhow::bail!("ECOGPT_CHANNEL_CAPACITY must be greater than zero");
        }
        Ok(())
    }

    /// Applies command-line overrides for the selection.
    pub fn with_selection(
        mut self,
        model: Option<ModelProfile>,
        intensity: Option<GridIntensityProfile>,
    ) -> Self {
        if let Some(m) = model {
            self.model = m;
        }
        if let Some(i) = intensity {
            self.intensity = i;
        }
        self
    }

    pub fn monitor_config(&self, require_focus: bool) -> MonitorConfig {
        MonitorConfig {
            target_app: self.target_app.clone(),
            model: self.model,
            intensity: self.intensity,
            require_focus,
        }
    }
}
