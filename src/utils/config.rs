//! Application configuration

use crate::utils::error::InfinityError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// URL of the streamed resource the transfer loop reads from
    pub resource_url: String,

    /// Interval of the progress and log simulators (milliseconds)
    pub tick_interval_ms: u64,

    /// Connect timeout for the transfer request (seconds)
    pub connect_timeout_secs: u64,

    /// Number of status lines retained in the rolling log
    pub log_capacity: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            resource_url: "https://example.com/largefile".to_string(),
            tick_interval_ms: 1000,
            connect_timeout_secs: 30,
            log_capacity: 10,
        }
    }
}

impl AppSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, InfinityError> {
        let content = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert!(config.tick_interval_ms > 0);
        assert!(config.log_capacity > 0);
        assert!(config.resource_url.starts_with("https://"));
    }

    #[test]
    fn test_load_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("infinity_settings_test.json");

        let mut settings = AppSettings::default();
        settings.tick_interval_ms = 250;
        settings.resource_url = "https://example.org/blob".to_string();
        std::fs::write(&path, serde_json::to_string(&settings).unwrap()).unwrap();

        let loaded = AppSettings::load(&path).expect("load settings");
        assert_eq!(loaded.tick_interval_ms, 250);
        assert_eq!(loaded.resource_url, "https://example.org/blob");
        assert_eq!(loaded.tick_interval(), Duration::from_millis(250));

        std::fs::remove_file(&path).ok();
    }
}
