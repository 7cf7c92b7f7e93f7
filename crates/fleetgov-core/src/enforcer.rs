//! Consistency enforcer for the status/compliance invariant.

use crate::model::{AgentStatus, Batch};

/// Compliance scores below this threshold force `Critical` status.
pub const CRITICAL_COMPLIANCE_THRESHOLD: f64 = 0.78;

/// Enforce status/compliance coherence on a freshly generated batch.
///
/// Every record with `compliance_score` below the threshold is set to
/// `Critical`, overwriting whatever the provisional draw produced. The
/// high-compliance side is intentionally left alone: a record at or
/// above the threshold keeps its drawn status, so Flagged and Critical
/// are still possible there. Compliance failure always means critical;
/// compliance success does not guarantee a low-severity label.
///
/// Touches no field but `status`. Returns the number of records whose
/// severity was raised, for logging.
pub fn enforce(batch: &mut Batch) -> usize {
    let mut escalated = 0;
    for record in batch.iter_mut() {
        if record.compliance_score < CRITICAL_COMPLIANCE_THRESHOLD
            && record.status != AgentStatus::Critical
        {
            record.status = AgentStatus::Critical;
            escalated += 1;
        }
    }
    escalated
}
