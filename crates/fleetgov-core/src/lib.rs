//! Fleetgov Core - Fleet-telemetry provider for an AI-agent governance console.
//!
//! This crate provides the generation, classification, and caching core
//! behind the console:
//! - Mode controller mapping the stress flag to generation bounds
//! - Telemetry generator for per-agent operational records
//! - Consistency enforcer for the status/compliance invariant
//! - TTL-bounded snapshot cache with manual invalidation
//!
//! # Example
//!
//! ```rust
//! use fleetgov_core::TelemetryService;
//!
//! let service = TelemetryService::with_defaults();
//! let batch = service.fetch_telemetry(false, 250)?;
//! assert_eq!(batch.len(), 250);
//! service.refresh()?;
//! # Ok::<(), fleetgov_core::TelemetryError>(())
//! ```

pub mod cache;
pub mod config;
pub mod enforcer;
pub mod error;
pub mod generator;
pub mod model;
pub mod modes;
pub mod service;
pub mod summary;

pub use cache::{SnapshotCache, TelemetryKey};
pub use config::{ConfigError, TelemetryConfig};
pub use enforcer::CRITICAL_COMPLIANCE_THRESHOLD;
pub use error::{Result, TelemetryError};
pub use generator::TelemetryGenerator;
pub use model::{AgentRecord, AgentStatus, Batch, Dept};
pub use modes::{COMPLIANCE_CEILING, GenerationBounds, LATENCY_CEILING_MS};
pub use service::TelemetryService;
pub use summary::{FleetSummary, critical_head};
