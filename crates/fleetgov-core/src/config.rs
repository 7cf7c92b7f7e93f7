//! Telemetry configuration loading from workspace config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading telemetry configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration validation error.
    #[error("Configuration validation error: {0}")]
    Validation(String),
}

/// Telemetry provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// How long a cached snapshot stays eligible for reuse, in seconds.
    pub ttl_secs: u64,
    /// Batch size used when the caller does not specify one.
    pub default_agents: usize,
    /// Hard ceiling on the batch size a single request may ask for.
    pub max_agents: usize,
    /// Fixed seed for the random source. Leave unset in production;
    /// set in tests to make builds reproducible.
    pub seed: Option<u64>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { ttl_secs: 60, default_agents: 250, max_agents: 10_000, seed: None }
    }
}

impl TelemetryConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    /// Returns a `Validation` error for a zero TTL, a zero agent ceiling,
    /// or a default batch size above the ceiling.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ttl_secs == 0 {
            return Err(ConfigError::Validation("ttl_secs must be at least 1".to_string()));
        }
        if self.max_agents == 0 {
            return Err(ConfigError::Validation("max_agents must be at least 1".to_string()));
        }
        if self.default_agents > self.max_agents {
            return Err(ConfigError::Validation(format!(
                "default_agents ({}) exceeds max_agents ({})",
                self.default_agents, self.max_agents
            )));
        }
        Ok(())
    }

    /// Load telemetry configuration from the workspace config file.
    ///
    /// Searches for `.fleetgov/config.toml` under the workspace root.
    /// A missing file or a missing `[telemetry]` section yields the
    /// default configuration.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(workspace_root: &Path) -> Result<Self, ConfigError> {
        let config_path = default_config_path(workspace_root);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let table: toml::Table = toml::from_str(&content)?;

        let Some(section) = table.get("telemetry") else {
            return Ok(Self::default());
        };

        let config: TelemetryConfig =
            section.clone().try_into().map_err(ConfigError::TomlParse)?;
        config.validate()?;
        Ok(config)
    }
}

/// Get the default config file path for a workspace.
#[must_use]
pub fn default_config_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(".fleetgov").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = TelemetryConfig::default();
        assert_eq!(config.ttl_secs, 60);
        assert_eq!(config.default_agents, 250);
        assert_eq!(config.max_agents, 10_000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_default_when_file_missing() {
        let temp = TempDir::new().unwrap();
        let config = TelemetryConfig::load(temp.path()).unwrap();
        assert_eq!(config, TelemetryConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(".fleetgov");
        std::fs::create_dir_all(&config_dir).unwrap();

        let config_content = r#"
[telemetry]
ttl_secs = 30
default_agents = 100
max_agents = 500
seed = 42
"#;

        std::fs::write(config_dir.join("config.toml"), config_content).unwrap();

        let config = TelemetryConfig::load(temp.path()).unwrap();
        assert_eq!(config.ttl_secs, 30);
        assert_eq!(config.default_agents, 100);
        assert_eq!(config.max_agents, 500);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_load_default_when_section_missing() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(".fleetgov");
        std::fs::create_dir_all(&config_dir).unwrap();

        std::fs::write(config_dir.join("config.toml"), "[other.section]\nvalue = 1\n").unwrap();

        let config = TelemetryConfig::load(temp.path()).unwrap();
        assert_eq!(config, TelemetryConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let config_dir = temp.path().join(".fleetgov");
        std::fs::create_dir_all(&config_dir).unwrap();

        let config_content = r#"
[telemetry]
default_agents = 2000
max_agents = 100
"#;

        std::fs::write(config_dir.join("config.toml"), config_content).unwrap();

        let err = TelemetryConfig::load(temp.path()).unwrap_err();
        match err {
            ConfigError::Validation(msg) => assert!(msg.contains("default_agents")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_validate_zero_ttl() {
        let config = TelemetryConfig { ttl_secs: 0, ..TelemetryConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
