//! Core data types for fleet telemetry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Department an agent is deployed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dept {
    /// Commercial-facing agents (sales, support).
    Commercial,
    /// Risk and legal review agents.
    #[serde(rename = "Risk/Legal")]
    RiskLegal,
    /// Internal operations agents.
    Operations,
    /// Product and engineering agents.
    Product,
}

impl Dept {
    /// All departments, in registry order. Used for uniform draws.
    pub const ALL: [Dept; 4] =
        [Dept::Commercial, Dept::RiskLegal, Dept::Operations, Dept::Product];
}

impl fmt::Display for Dept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dept::Commercial => write!(f, "Commercial"),
            Dept::RiskLegal => write!(f, "Risk/Legal"),
            Dept::Operations => write!(f, "Operations"),
            Dept::Product => write!(f, "Product"),
        }
    }
}

/// Risk status of a monitored agent, ordered by severity.
///
/// `Healthy < Flagged < Critical`. The consistency enforcer only ever
/// moves a record up this ordering, never down.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AgentStatus {
    /// Operating within all governance thresholds.
    Healthy,
    /// Under review; at least one soft threshold tripped.
    Flagged,
    /// Compliance failure; requires operator attention.
    Critical,
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentStatus::Healthy => write!(f, "Healthy"),
            AgentStatus::Flagged => write!(f, "Flagged"),
            AgentStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// One row of telemetry for one monitored agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRecord {
    /// Stable identifier, unique within a batch (e.g. "ID-1042").
    pub agent_id: String,
    /// Department the agent serves.
    pub dept: Dept,
    /// Risk status after consistency enforcement.
    pub status: AgentStatus,
    /// Compliance score in `[0, 1]`.
    pub compliance_score: f64,
    /// Observed response latency in milliseconds.
    pub latency_ms: u32,
    /// Tokens consumed over the trailing 24 hours.
    pub tokens_24h: u64,
}

/// The full set of agent records produced by one generation cycle.
///
/// Records are independent draws; there are no cross-record relationships.
pub type Batch = Vec<AgentRecord>;
