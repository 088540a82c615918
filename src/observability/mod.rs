//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges, histograms)
//!     → diagnostics.rs (caught failures routed to a sink)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Metrics endpoint (Prometheus scrape)
//!     → Tests (recording sinks)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event; no string-formatted payloads
//! - Request ID flows through all HTTP spans
//! - Metrics are cheap no-ops until an exporter is installed

pub mod diagnostics;
pub mod logging;
pub mod metrics;

pub use diagnostics::{Diagnostic, DiagnosticOrigin, DiagnosticSink, TracingSink};
