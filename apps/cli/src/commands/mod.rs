//! CLI command implementations.

pub mod fetch;
pub mod summary;

use fleetgov_core::{Batch, TelemetryService};

/// Fetch a batch with either the requested or the configured size.
pub fn fetch_batch(
    service: &TelemetryService,
    stressed: bool,
    agents: Option<usize>,
) -> fleetgov_core::Result<Batch> {
    match agents {
        Some(n) => service.fetch_telemetry(stressed, n),
        None => service.fetch_telemetry_default(stressed),
    }
}
