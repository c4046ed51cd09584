use crate::config::preferences::UnitPreferences;
use crate::units::{DimensionKind, UnitError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid preferred unit for {dimension}: {source}")]
    InvalidUnit {
        dimension: DimensionKind,
        #[source]
        source: UnitError,
    },
}

/// Settings read from an `nxunit.toml` file
///
/// ```toml
/// log_level = "info"
///
/// [preferences]
/// length = "nm"
/// q = "1/A"
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Default tracing filter when neither RUST_LOG nor -v is given
    #[serde(default)]
    pub log_level: Option<String>,

    /// Dimension -> unit values of that dimension are converted to
    #[serde(default)]
    pub preferences: HashMap<DimensionKind, String>,
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate the `[preferences]` table against the dimension tables
    pub fn unit_preferences(&self) -> Result<UnitPreferences, ConfigError> {
        let mut preferences = UnitPreferences::default();
        for (&dimension, unit) in &self.preferences {
            preferences
                .set(dimension, unit)
                .map_err(|source| ConfigError::InvalidUnit { dimension, source })?;
        }
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_str() {
        let config = Config::load_from_str(
            r#"
log_level = "debug"

[preferences]
length = "nanometers"
q = "1/A"
"#,
        )
        .unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.preferences.len(), 2);

        let preferences = config.unit_preferences().unwrap();
        assert_eq!(preferences.preferred_unit(DimensionKind::Length), Some("nanom"));
        assert_eq!(
            preferences.preferred_unit(DimensionKind::MomentumTransfer),
            Some("Å^{-1}")
        );
        assert_eq!(preferences.preferred_unit(DimensionKind::Time), None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::load_from_str("").unwrap();
        assert!(config.log_level.is_none());
        assert!(config.unit_preferences().unwrap().is_empty());
        assert!(Config::empty().preferences.is_empty());
    }

    #[test]
    fn test_unknown_dimension_rejected_on_load() {
        let err = Config::load_from_str("[preferences]\nmass = \"kg\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("Unknown dimension type: mass"));
    }

    #[test]
    fn test_preferences_keyed_by_dimension() {
        let config = Config::load_from_str("[preferences]\nse = \"nm\"\n").unwrap();
        assert_eq!(
            config.preferences.get(&DimensionKind::SpinEchoLength).map(String::as_str),
            Some("nm")
        );
    }

    #[test]
    fn test_unit_from_wrong_dimension() {
        let config = Config::load_from_str("[preferences]\ntime = \"mm\"\n").unwrap();
        let err = config.unit_preferences().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUnit { .. }));
        assert!(err.to_string().starts_with("Invalid preferred unit for time"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Config::load_from_str("preferences = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
