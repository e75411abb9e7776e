//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stdout log aggregation
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; level set by RUST_LOG
//! - Metric updates are cheap counter increments, safe on every request
//! - The exporter is optional: without METRICS_ADDRESS nothing is exposed

pub mod logging;
pub mod metrics;
