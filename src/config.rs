//! Dashboard Configuration
//! Immutable process-wide settings: endpoint label, refresh cadence and
//! chart palette. Built once at startup and passed by reference.

use crate::charts::Rgb;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "THREATBOARD_CONFIG";
/// Default config file, looked up next to the working directory.
pub const CONFIG_FILE: &str = "threatboard.json";

const DEFAULT_ENDPOINT: &str = "https://api.medoasbot.com/v1";
const DEFAULT_INTERVAL_MS: u64 = 30_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Named palette entries, stored as `#rrggbb` strings so the config
/// file stays hand-editable. Malformed entries fall back to the
/// compiled-in color at lookup time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPalette {
    pub primary: String,
    pub secondary: String,
    pub success: String,
    pub warning: String,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            primary: "#3498db".to_string(),
            secondary: "#e74c3c".to_string(),
            success: "#27ae60".to_string(),
            warning: "#e67e22".to_string(),
        }
    }
}

impl ChartPalette {
    pub fn primary(&self) -> Rgb {
        Rgb::from_hex(&self.primary).unwrap_or(Rgb::new(0x34, 0x98, 0xdb))
    }

    pub fn secondary(&self) -> Rgb {
        Rgb::from_hex(&self.secondary).unwrap_or(Rgb::new(0xe7, 0x4c, 0x3c))
    }

    pub fn success(&self) -> Rgb {
        Rgb::from_hex(&self.success).unwrap_or(Rgb::new(0x27, 0xae, 0x60))
    }

    pub fn warning(&self) -> Rgb {
        Rgb::from_hex(&self.warning).unwrap_or(Rgb::new(0xe6, 0x7e, 0x22))
    }
}

/// Process-wide dashboard settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Displayed in the panel; never dialled.
    pub api_endpoint: String,
    pub update_interval_ms: u64,
    pub chart_colors: ChartPalette,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            update_interval_ms: DEFAULT_INTERVAL_MS,
            chart_colors: ChartPalette::default(),
        }
    }
}

impl DashboardConfig {
    /// Config file location: `THREATBOARD_CONFIG` when set, otherwise
    /// `threatboard.json` in the working directory.
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load the config file if present, falling back to defaults when
    /// it is absent or malformed. A malformed file is reported but
    /// never fatal.
    pub fn load_or_default() -> Self {
        let path = Self::path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded dashboard config");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_shipped_dashboard() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_endpoint, "https://api.medoasbot.com/v1");
        assert_eq!(config.update_interval_ms, 30_000);
        assert_eq!(config.chart_colors.primary(), Rgb::new(0x34, 0x98, 0xdb));
        assert_eq!(config.chart_colors.secondary(), Rgb::new(0xe7, 0x4c, 0x3c));
        assert_eq!(config.chart_colors.success(), Rgb::new(0x27, 0xae, 0x60));
        assert_eq!(config.chart_colors.warning(), Rgb::new(0xe6, 0x7e, 0x22));
    }

    #[test]
    fn config_file_roundtrips() {
        let mut config = DashboardConfig::default();
        config.update_interval_ms = 5_000;
        config.chart_colors.primary = "#112233".to_string();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("threatboard.json");
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = DashboardConfig::load(&path).unwrap();
        assert_eq!(loaded.update_interval_ms, 5_000);
        assert_eq!(loaded.chart_colors.primary(), Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(loaded.api_endpoint, config.api_endpoint);
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("threatboard.json");
        std::fs::write(&path, r#"{ "update_interval_ms": 1000 }"#).unwrap();

        let loaded = DashboardConfig::load(&path).unwrap();
        assert_eq!(loaded.update_interval_ms, 1_000);
        assert_eq!(loaded.api_endpoint, "https://api.medoasbot.com/v1");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("threatboard.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(matches!(
            DashboardConfig::load(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn bad_palette_entries_fall_back() {
        let mut palette = ChartPalette::default();
        palette.primary = "blue".to_string();
        palette.warning = "#12".to_string();
        assert_eq!(palette.primary(), Rgb::new(0x34, 0x98, 0xdb));
        assert_eq!(palette.warning(), Rgb::new(0xe6, 0x7e, 0x22));
    }
}
