//! Telemetry generator: synthesizes a batch of raw agent records.

use crate::error::{Result, TelemetryError};
use crate::model::{AgentRecord, AgentStatus, Batch, Dept};
use crate::modes::{GenerationBounds, LATENCY_CEILING_MS};
use rand::Rng;

/// Offset added to the positional index when forming agent ids.
///
/// Ids are positional, not random, so the same fleet position keeps the
/// same id across regenerations and the display layer can join rows
/// across refreshes.
pub const AGENT_ID_BASE: usize = 1000;

/// Trailing-24h token range, unaffected by stress mode.
pub const TOKENS_24H_RANGE: std::ops::RangeInclusive<u64> = 5_000..=500_000;

/// Provisional status weights: Healthy 0.80, Flagged 0.15, Critical 0.05.
const HEALTHY_WEIGHT: f64 = 0.80;
const FLAGGED_WEIGHT: f64 = 0.15;

/// Generates batches of raw agent records within mode-dependent bounds.
///
/// The generator draws every field independently; the provisional
/// `status` draw is uncorrelated with `compliance_score` and may be
/// overridden downstream by the consistency enforcer.
#[derive(Debug, Clone)]
pub struct TelemetryGenerator {
    max_agents: usize,
}

impl TelemetryGenerator {
    /// Creates a generator with the given batch-size ceiling.
    #[must_use]
    pub fn new(max_agents: usize) -> Self {
        Self { max_agents }
    }

    /// Generate `n_agents` independent records within `bounds`.
    ///
    /// `n_agents = 0` yields an empty batch, not an error. The caller's
    /// random source is injected so tests can seed it.
    ///
    /// # Errors
    /// Returns `AgentCountExceeded` if `n_agents` is above the ceiling.
    /// The caller must treat this as non-fatal; it may fall back to an
    /// empty batch for rendering while surfacing the error.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n_agents: usize,
        bounds: &GenerationBounds,
    ) -> Result<Batch> {
        if n_agents > self.max_agents {
            return Err(TelemetryError::AgentCountExceeded {
                requested: n_agents,
                max: self.max_agents,
            });
        }

        let mut batch = Vec::with_capacity(n_agents);
        for position in 0..n_agents {
            batch.push(AgentRecord {
                agent_id: format!("ID-{}", AGENT_ID_BASE + position),
                dept: Dept::ALL[rng.gen_range(0..Dept::ALL.len())],
                status: draw_provisional_status(rng),
                compliance_score: rng.gen_range(bounds.compliance_floor..=1.0),
                latency_ms: rng.gen_range(bounds.latency_floor_ms..=LATENCY_CEILING_MS),
                tokens_24h: rng.gen_range(TOKENS_24H_RANGE),
            });
        }
        Ok(batch)
    }
}

/// Weighted provisional status draw, independent of every other field.
fn draw_provisional_status<R: Rng + ?Sized>(rng: &mut R) -> AgentStatus {
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < HEALTHY_WEIGHT {
        AgentStatus::Healthy
    } else if roll < HEALTHY_WEIGHT + FLAGGED_WEIGHT {
        AgentStatus::Flagged
    } else {
        AgentStatus::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_empty_batch() {
        let generator = TelemetryGenerator::new(10_000);
        let mut rng = StdRng::seed_from_u64(7);
        let batch =
            generator.generate(&mut rng, 0, &GenerationBounds::resolve(false)).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_generate_shape_and_ids() {
        let generator = TelemetryGenerator::new(10_000);
        let mut rng = StdRng::seed_from_u64(7);
        let batch =
            generator.generate(&mut rng, 25, &GenerationBounds::resolve(false)).unwrap();

        assert_eq!(batch.len(), 25);
        for (i, record) in batch.iter().enumerate() {
            assert_eq!(record.agent_id, format!("ID-{}", 1000 + i));
        }
    }

    #[test]
    fn test_ids_stable_across_regenerations() {
        let generator = TelemetryGenerator::new(10_000);
        let bounds = GenerationBounds::resolve(true);

        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);
        let batch_a = generator.generate(&mut rng_a, 10, &bounds).unwrap();
        let batch_b = generator.generate(&mut rng_b, 10, &bounds).unwrap();

        for (a, b) in batch_a.iter().zip(&batch_b) {
            assert_eq!(a.agent_id, b.agent_id);
        }
    }

    #[test]
    fn test_generate_respects_bounds() {
        let generator = TelemetryGenerator::new(10_000);
        let mut rng = StdRng::seed_from_u64(99);

        for (stressed, latency_floor, compliance_floor) in
            [(false, 200, 0.75), (true, 600, 0.50)]
        {
            let bounds = GenerationBounds::resolve(stressed);
            let batch = generator.generate(&mut rng, 500, &bounds).unwrap();
            for record in &batch {
                assert!(record.latency_ms >= latency_floor);
                assert!(record.latency_ms <= LATENCY_CEILING_MS);
                assert!(record.compliance_score >= compliance_floor);
                assert!(record.compliance_score <= 1.0);
                assert!(TOKENS_24H_RANGE.contains(&record.tokens_24h));
            }
        }
    }

    #[test]
    fn test_generate_rejects_oversized_batch() {
        let generator = TelemetryGenerator::new(100);
        let mut rng = StdRng::seed_from_u64(7);
        let err = generator
            .generate(&mut rng, 101, &GenerationBounds::resolve(false))
            .unwrap_err();
        match err {
            TelemetryError::AgentCountExceeded { requested, max } => {
                assert_eq!(requested, 101);
                assert_eq!(max, 100);
            }
            _ => panic!("Expected AgentCountExceeded"),
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let generator = TelemetryGenerator::new(10_000);
        let bounds = GenerationBounds::resolve(false);

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let batch_a = generator.generate(&mut rng_a, 50, &bounds).unwrap();
        let batch_b = generator.generate(&mut rng_b, 50, &bounds).unwrap();
        assert_eq!(batch_a, batch_b);
    }
}
