//! Service facade composing mode resolution, generation, enforcement,
//! and the snapshot cache behind the two calls the display layer needs.

use crate::cache::{SnapshotCache, TelemetryKey};
use crate::config::TelemetryConfig;
use crate::enforcer;
use crate::error::Result;
use crate::generator::TelemetryGenerator;
use crate::model::Batch;
use crate::modes::GenerationBounds;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

/// Fleet-telemetry provider for the governance console.
///
/// Owns the snapshot cache and the random-source policy; everything
/// else in the pipeline is pure. Cloning is cheap and clones share the
/// same cache.
#[derive(Debug, Clone)]
pub struct TelemetryService {
    config: TelemetryConfig,
    generator: TelemetryGenerator,
    cache: SnapshotCache,
}

impl TelemetryService {
    /// Create a service from a validated configuration.
    ///
    /// # Errors
    /// Returns a configuration error if `config` fails validation.
    pub fn new(config: TelemetryConfig) -> Result<Self> {
        config.validate()?;
        let generator = TelemetryGenerator::new(config.max_agents);
        Ok(Self { config, generator, cache: SnapshotCache::new() })
    }

    /// Create a service with the default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        let config = TelemetryConfig::default();
        let generator = TelemetryGenerator::new(config.max_agents);
        Self { config, generator, cache: SnapshotCache::new() }
    }

    /// Fetch a telemetry batch for `(stressed, n_agents)`.
    ///
    /// Returns the cached snapshot when one is present and unexpired for
    /// this exact key; otherwise runs the mode-controller → generator →
    /// enforcer pipeline, stores the result, and returns it.
    ///
    /// # Errors
    /// Propagates a generation failure unmemoized; a failed build is
    /// never cached and the next call retries.
    pub fn fetch_telemetry(&self, stressed: bool, n_agents: usize) -> Result<Batch> {
        let key = TelemetryKey { stressed, n_agents };
        let ttl = Duration::from_secs(self.config.ttl_secs);
        self.cache.get_or_build(key, ttl, || self.build_snapshot(stressed, n_agents))
    }

    /// Fetch a telemetry batch with the configured default batch size.
    ///
    /// # Errors
    /// Same failure modes as [`fetch_telemetry`](Self::fetch_telemetry).
    pub fn fetch_telemetry_default(&self, stressed: bool) -> Result<Batch> {
        self.fetch_telemetry(stressed, self.config.default_agents)
    }

    /// Invalidate every cached snapshot, regardless of age.
    ///
    /// Bound to a user-initiated refresh control outside the core.
    /// Returns the number of snapshots dropped.
    ///
    /// # Errors
    /// Returns `CachePoisoned` if the cache lock is poisoned.
    pub fn refresh(&self) -> Result<usize> {
        let removed = self.cache.invalidate_all()?;
        tracing::info!(removed, "telemetry snapshots invalidated");
        Ok(removed)
    }

    /// The configuration this service was built with.
    #[must_use]
    pub fn config(&self) -> &TelemetryConfig {
        &self.config
    }

    /// Run one full generation cycle, outside the cache.
    fn build_snapshot(&self, stressed: bool, n_agents: usize) -> Result<Batch> {
        let bounds = GenerationBounds::resolve(stressed);
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut batch = match self.generator.generate(&mut rng, n_agents, &bounds) {
            Ok(batch) => batch,
            Err(err) => {
                tracing::warn!(stressed, n_agents, %err, "telemetry generation failed");
                return Err(err);
            }
        };
        let escalated = enforcer::enforce(&mut batch);

        tracing::info!(stressed, n_agents, escalated, "built telemetry snapshot");
        Ok(batch)
    }
}

impl Default for TelemetryService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AgentStatus;

    fn seeded_service(ttl_secs: u64) -> TelemetryService {
        TelemetryService::new(TelemetryConfig {
            ttl_secs,
            seed: Some(42),
            ..TelemetryConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_fetch_default_batch_size() {
        let service = seeded_service(60);
        let batch = service.fetch_telemetry_default(false).unwrap();
        assert_eq!(batch.len(), 250);
    }

    #[test]
    fn test_every_returned_batch_satisfies_coherence() {
        let service = seeded_service(60);
        for stressed in [false, true] {
            let batch = service.fetch_telemetry(stressed, 300).unwrap();
            for record in &batch {
                if record.compliance_score < enforcer::CRITICAL_COMPLIANCE_THRESHOLD {
                    assert_eq!(record.status, AgentStatus::Critical);
                }
            }
        }
    }

    #[test]
    fn test_zero_agents_is_not_an_error() {
        let service = seeded_service(60);
        let batch = service.fetch_telemetry(false, 0).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_oversized_request_propagates_unmemoized() {
        let service = TelemetryService::new(TelemetryConfig {
            max_agents: 10,
            default_agents: 5,
            seed: Some(1),
            ..TelemetryConfig::default()
        })
        .unwrap();

        assert!(service.fetch_telemetry(false, 11).is_err());
        // Within bounds still works afterwards.
        assert_eq!(service.fetch_telemetry(false, 10).unwrap().len(), 10);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TelemetryConfig { ttl_secs: 0, ..TelemetryConfig::default() };
        assert!(TelemetryService::new(config).is_err());
    }
}
