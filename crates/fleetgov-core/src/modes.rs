//! Mode controller: translates the stress flag into generation bounds.

use serde::{Deserialize, Serialize};

/// Fixed latency ceiling in milliseconds, identical in both modes.
pub const LATENCY_CEILING_MS: u32 = 900;

/// Fixed compliance ceiling, identical in both modes.
pub const COMPLIANCE_CEILING: f64 = 1.0;

/// Lower bounds for the mode-dependent telemetry draws.
///
/// Stress mode narrows the achievable "good" outcomes by raising the
/// latency floor and lowering the compliance floor; the ceilings never
/// move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationBounds {
    /// Minimum latency a draw can produce, in milliseconds.
    pub latency_floor_ms: u32,
    /// Minimum compliance score a draw can produce.
    pub compliance_floor: f64,
}

impl GenerationBounds {
    /// Resolve the generation bounds for the given mode.
    ///
    /// Pure function: no side effects, no failure modes.
    #[must_use]
    pub fn resolve(stressed: bool) -> Self {
        if stressed {
            Self { latency_floor_ms: 600, compliance_floor: 0.50 }
        } else {
            Self { latency_floor_ms: 200, compliance_floor: 0.75 }
        }
    }
}
