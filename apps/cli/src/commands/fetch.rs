//! Fetch command: print the agent registry for one snapshot.

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use fleetgov_core::TelemetryService;

/// Execute the fetch command.
pub fn execute(
    service: &TelemetryService,
    stressed: bool,
    agents: Option<usize>,
    json: bool,
) -> Result<()> {
    let batch = super::fetch_batch(service, stressed, agents)
        .context("Telemetry sync failed")?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&batch).context("Failed to serialize batch")?
        );
        return Ok(());
    }

    let mode = if stressed { "stress" } else { "nominal" };
    println!(
        "Agent Registry | {} agents | {} mode | Sync Time: {} UTC",
        batch.len(),
        mode,
        Utc::now().format("%H:%M:%S")
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Agent", "Dept", "Status", "Compliance", "Latency (ms)", "Tokens 24h"]);

    for record in &batch {
        table.add_row(vec![
            record.agent_id.clone(),
            record.dept.to_string(),
            record.status.to_string(),
            format!("{:.1}%", record.compliance_score * 100.0),
            record.latency_ms.to_string(),
            record.tokens_24h.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
