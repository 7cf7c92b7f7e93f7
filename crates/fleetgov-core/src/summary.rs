//! Governance KPIs derived from a telemetry batch.

use crate::model::{AgentRecord, AgentStatus};
use serde::{Deserialize, Serialize};

/// Fleet-wide KPIs for the console header tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    /// Number of agents in the batch.
    pub fleet_size: usize,
    /// Mean compliance score, 0.0 for an empty fleet.
    pub compliance_avg: f64,
    /// Agents currently at Critical status.
    pub critical_count: usize,
    /// Agents currently at Flagged status.
    pub flagged_count: usize,
    /// Mean latency in milliseconds, 0.0 for an empty fleet.
    pub latency_avg_ms: f64,
}

impl FleetSummary {
    /// Compute KPIs over a batch. Pure; no state.
    #[must_use]
    pub fn from_batch(batch: &[AgentRecord]) -> Self {
        let fleet_size = batch.len();
        let (compliance_avg, latency_avg_ms) = if fleet_size == 0 {
            (0.0, 0.0)
        } else {
            let compliance_sum: f64 = batch.iter().map(|r| r.compliance_score).sum();
            let latency_sum: f64 = batch.iter().map(|r| f64::from(r.latency_ms)).sum();
            (compliance_sum / fleet_size as f64, latency_sum / fleet_size as f64)
        };

        Self {
            fleet_size,
            compliance_avg,
            critical_count: count_status(batch, AgentStatus::Critical),
            flagged_count: count_status(batch, AgentStatus::Flagged),
            latency_avg_ms,
        }
    }
}

fn count_status(batch: &[AgentRecord], status: AgentStatus) -> usize {
    batch.iter().filter(|r| r.status == status).count()
}

/// The first `n` critical records, in batch order. Feeds the console's
/// security event log.
#[must_use]
pub fn critical_head(batch: &[AgentRecord], n: usize) -> Vec<&AgentRecord> {
    batch.iter().filter(|r| r.status == AgentStatus::Critical).take(n).collect()
}
