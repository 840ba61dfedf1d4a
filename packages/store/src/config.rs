//! # Client configuration: `canteen.toml`
//!
//! Where the backend lives, where the canteen is, and who receives UPI
//! payments. Desktop reads the file from the platform config directory; the
//! web build uses the defaults with a compile-time API URL override.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:4000"
//!
//! [tracker]
//! canteen_lat = 26.9124
//! canteen_lon = 75.7873
//! walking_speed_kmh = 5.0
//! poll_interval_secs = 5
//!
//! [payment]
//! upi_vpa = "kashyaprishabh8957@okicici"
//! payee_name = "AllenEatery"
//! currency = "INR"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`CanteenConfig`] | Top-level config with builder helpers, TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`TrackerConfig`] | Canteen coordinates, walking speed and status poll interval. |
//! | [`PaymentConfig`] | UPI payee. |
//!
//! Every section has defaults, so a missing or empty file is the default
//! configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::tracker::GeoPoint;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanteenConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:4000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default = "default_canteen_lat")]
    pub canteen_lat: f64,
    #[serde(default = "default_canteen_lon")]
    pub canteen_lon: f64,
    #[serde(default = "default_walking_speed")]
    pub walking_speed_kmh: f64,
    /// Seconds between order status polls.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u32,
}

fn default_canteen_lat() -> f64 {
    26.9124
}

fn default_canteen_lon() -> f64 {
    75.7873
}

fn default_walking_speed() -> f64 {
    5.0
}

fn default_poll_interval() -> u32 {
    5
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            canteen_lat: default_canteen_lat(),
            canteen_lon: default_canteen_lon(),
            walking_speed_kmh: default_walking_speed(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    #[serde(default = "default_upi_vpa")]
    pub upi_vpa: String,
    #[serde(default = "default_payee_name")]
    pub payee_name: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_upi_vpa() -> String {
    "kashyaprishabh8957@okicici".to_string()
}

fn default_payee_name() -> String {
    "AllenEatery".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            upi_vpa: default_upi_vpa(),
            payee_name: default_payee_name(),
            currency: default_currency(),
        }
    }
}

impl CanteenConfig {
    /// Builder method to point at another backend. Trailing slashes are
    /// stripped so endpoint paths can be appended directly.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder method to set the status poll interval.
    pub fn with_poll_interval(mut self, secs: u32) -> Self {
        self.tracker.poll_interval_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "canteen.toml"
    }

    pub fn canteen_location(&self) -> GeoPoint {
        GeoPoint::new(self.tracker.canteen_lat, self.tracker.canteen_lon)
    }

    /// Poll interval in milliseconds, never below one second.
    pub fn poll_interval_ms(&self) -> u64 {
        u64::from(self.tracker.poll_interval_secs.max(1)) * 1000
    }

    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `path`, falling back to defaults when the file is missing or
    /// does not parse.
    pub fn load_or_default(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match Self::from_toml(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = CanteenConfig::from_toml("").unwrap();
        assert_eq!(config, CanteenConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.tracker.poll_interval_secs, 5);
        assert_eq!(config.payment.currency, "INR");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = CanteenConfig::from_toml(
            r#"
            [api]
            base_url = "https://canteen.example.edu"

            [tracker]
            poll_interval_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://canteen.example.edu");
        assert_eq!(config.tracker.poll_interval_secs, 10);
        assert_eq!(config.tracker.walking_speed_kmh, 5.0);
        assert_eq!(config.payment.payee_name, "AllenEatery");
    }

    #[test]
    fn toml_roundtrip_with_builders() {
        let config = CanteenConfig::default()
            .with_base_url("http://10.0.0.5:4000/")
            .with_poll_interval(0);
        assert_eq!(config.api.base_url, "http://10.0.0.5:4000");
        assert_eq!(config.poll_interval_ms(), 1000);

        let parsed = CanteenConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.canteen_location(), GeoPoint::new(26.9124, 75.7873));
    }

    #[test]
    fn load_or_default_tolerates_missing_and_broken_files() {
        let dir = std::env::temp_dir().join(format!("canteen_config_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CanteenConfig::filename());

        assert_eq!(CanteenConfig::load_or_default(&path), CanteenConfig::default());

        std::fs::write(&path, "[tracker]\npoll_interval_secs = \"soon\"").unwrap();
        assert_eq!(CanteenConfig::load_or_default(&path), CanteenConfig::default());

        std::fs::write(&path, "[tracker]\npoll_interval_secs = 3").unwrap();
        assert_eq!(CanteenConfig::load_or_default(&path).tracker.poll_interval_secs, 3);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
