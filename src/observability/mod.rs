//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP layer and rover core produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID is a field of the per-request trace span, so log lines inside it carry it
//! - Metrics are cheap; the exporter is only installed when enabled

pub mod logging;
pub mod metrics;
