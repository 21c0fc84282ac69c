//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the recipe service produce:
//!     → logging.rs (structured tracing events, request spans)
//!     → metrics.rs (request counters/histograms, creations, store errors)
//!
//! Consumers:
//!     → stdout (tracing-subscriber fmt layer)
//!     → Prometheus scrape endpoint (when enabled)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - Metric calls are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
