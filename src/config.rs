//! TOML configuration overrides.
//!
//! Every field is optional; anything left out keeps its built-in default.
//!
//! ```toml
//! # spread-dash.toml
//! [ingest]
//! sensor_prefix = "ttxd_"
//! column_separator = "."
//! units_marker = "units"
//!
//! [views]
//! polar_floor_offset = 60.0
//! polar_ceiling_offset = 10.0
//! highlight_fill = "green"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::ingest::IngestConfig;
use crate::views::ViewConfig;

/// Errors that can occur while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed TOML or a value of the wrong type
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Root configuration structure for `spread-dash.toml` files
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Upload normalization settings
    #[serde(default)]
    pub ingest: IngestSettings,

    /// Chart display settings
    #[serde(default)]
    pub views: ViewSettings,
}

/// Overrides for [`IngestConfig`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestSettings {
    /// Exhaust thermocouple column prefix
    pub sensor_prefix: Option<String>,

    /// Vendor tag separator in column names
    pub column_separator: Option<String>,

    /// Marker text of the two-row units header
    pub units_marker: Option<String>,

    /// Engine speed column name
    pub engine_speed_column: Option<String>,

    /// Power column name
    pub power_column: Option<String>,
}

/// Overrides for [`ViewConfig`]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewSettings {
    /// Degrees below the sensor minimum where the polar axis starts
    pub polar_floor_offset: Option<f64>,

    /// Degrees above the sensor maximum where the polar axis ends
    pub polar_ceiling_offset: Option<f64>,

    /// Highlight half width in pixels
    pub highlight_half_width_px: Option<f64>,

    /// Highlight opacity (0-1)
    pub highlight_opacity: Option<f64>,

    /// Highlight fill color
    pub highlight_fill: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Ingestion settings with overrides applied to the defaults
    pub fn ingest_config(&self) -> IngestConfig {
        let defaults = IngestConfig::default();
        let settings = &self.ingest;
        IngestConfig {
            sensor_prefix: settings.sensor_prefix.clone().unwrap_or(defaults.sensor_prefix),
            column_separator: settings
                .column_separator
                .clone()
                .unwrap_or(defaults.column_separator),
            units_marker: settings.units_marker.clone().unwrap_or(defaults.units_marker),
            engine_speed_column: settings
                .engine_speed_column
                .clone()
                .unwrap_or(defaults.engine_speed_column),
            power_column: settings.power_column.clone().unwrap_or(defaults.power_column),
        }
    }

    /// View settings with overrides applied to the defaults
    pub fn view_config(&self) -> ViewConfig {
        let defaults = ViewConfig::default();
        let settings = &self.views;
        ViewConfig {
            polar_floor_offset: settings
                .polar_floor_offset
                .unwrap_or(defaults.polar_floor_offset),
            polar_ceiling_offset: settings
                .polar_ceiling_offset
                .unwrap_or(defaults.polar_ceiling_offset),
            highlight_half_width_px: settings
                .highlight_half_width_px
                .unwrap_or(defaults.highlight_half_width_px),
            highlight_opacity: settings
                .highlight_opacity
                .unwrap_or(defaults.highlight_opacity),
            highlight_fill: settings.highlight_fill.clone().unwrap_or(defaults.highlight_fill),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [ingest]
            sensor_prefix = "ttx_"
            column_separator = ":"
            units_marker = "eng"
            engine_speed_column = "speed"
            power_column = "mw"

            [views]
            polar_floor_offset = 100.0
            polar_ceiling_offset = 25.0
            highlight_half_width_px = 3.0
            highlight_opacity = 0.8
            highlight_fill = "red"
        "#;

        let config = Config::from_str(toml).unwrap();
        let ingest = config.ingest_config();
        assert_eq!(ingest.sensor_prefix, "ttx_");
        assert_eq!(ingest.column_separator, ":");
        assert_eq!(ingest.units_marker, "eng");
        assert_eq!(ingest.engine_speed_column, "speed");
        assert_eq!(ingest.power_column, "mw");

        let views = config.view_config();
        assert_eq!(views.polar_floor_offset, 100.0);
        assert_eq!(views.polar_ceiling_offset, 25.0);
        assert_eq!(views.highlight_half_width_px, 3.0);
        assert_eq!(views.highlight_opacity, 0.8);
        assert_eq!(views.highlight_fill, "red");
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [views]
            highlight_fill = "orange"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.ingest_config(), IngestConfig::default());
        assert_eq!(config.view_config().highlight_fill, "orange");
        assert_eq!(config.view_config().polar_floor_offset, 60.0);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.view_config(), ViewConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_str("[views]\npolar_floor_offset = \"sixty\""),
            Err(ConfigError::TomlError(_))
        ));
        assert!(matches!(
            Config::from_str("[ingest]\nsensor_prefx = \"ttxd_\""),
            Err(ConfigError::TomlError(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spread-dash.toml");
        std::fs::write(&path, "[ingest]\nunits_marker = \"eenheden\"\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.ingest_config().units_marker, "eenheden");

        assert!(matches!(
            Config::from_file(dir.path().join("missing.toml")),
            Err(ConfigError::IoError(_))
        ));
    }
}
