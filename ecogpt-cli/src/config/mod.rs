//! Application configuration: selection defaults, focus target, refresh behavior, and logging.

mod app_config;


pub use app_config::{AppConfig, UPDATE_INTERVAL_RANGE};
