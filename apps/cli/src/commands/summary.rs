//! Summary command: fleet KPIs plus the security event log.

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use fleetgov_core::{FleetSummary, TelemetryService, critical_head};

/// Execute the summary command.
pub fn execute(
    service: &TelemetryService,
    stressed: bool,
    agents: Option<usize>,
    events: usize,
    json: bool,
) -> Result<()> {
    let batch = super::fetch_batch(service, stressed, agents)
        .context("Telemetry sync failed")?;
    let summary = FleetSummary::from_batch(&batch);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        );
        return Ok(());
    }

    println!("{}", "Fleet Governance Summary".bold());
    println!("Enterprise AI Fleet Monitoring | Sync Time: {} UTC", Utc::now().format("%H:%M:%S"));
    println!();
    println!("  Active Fleet:    {}", summary.fleet_size);
    println!("  Compliance Avg:  {:.1}%", summary.compliance_avg * 100.0);
    println!("  Avg Latency:     {:.0} ms", summary.latency_avg_ms);
    println!("  Flagged:         {}", summary.flagged_count.to_string().yellow());
    println!("  Critical Alerts: {}", summary.critical_count.to_string().red());

    let critical = critical_head(&batch, events);
    if !critical.is_empty() {
        println!();
        println!("{}", "Security Event Log".bold());
        for record in critical {
            println!(
                "  {} {} - compliance threshold breached ({:.1}%)",
                "WARN".red(),
                record.agent_id,
                record.compliance_score * 100.0
            );
        }
    }

    Ok(())
}
