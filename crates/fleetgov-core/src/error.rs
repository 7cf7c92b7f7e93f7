//! Error types for the fleetgov core.

use crate::config::ConfigError;
use thiserror::Error;

/// Core error type for telemetry operations.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Requested batch size exceeds the configured ceiling.
    #[error("Generation failed: agent count {requested} exceeds maximum {max}")]
    AgentCountExceeded {
        /// Number of agents the caller asked for.
        requested: usize,
        /// Configured hard ceiling.
        max: usize,
    },

    /// Snapshot cache lock was poisoned by a panicking holder.
    #[error("Snapshot cache lock poisoned")]
    CachePoisoned,
}

/// Result type alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_count_exceeded_display() {
        let err = TelemetryError::AgentCountExceeded { requested: 50_000, max: 10_000 };
        let msg = format!("{}", err);
        assert!(msg.contains("50000"));
        assert!(msg.contains("10000"));
        assert!(msg.contains("Generation failed"));
    }

    #[test]
    fn test_config_error_conversion() {
        let config_err = ConfigError::Validation("max_agents must be at least 1".to_string());
        let err: TelemetryError = config_err.into();
        match err {
            TelemetryError::Config(ConfigError::Validation(msg)) => {
                assert!(msg.contains("max_agents"));
            }
            _ => panic!("Expected Config error variant"),
        }
    }
}
