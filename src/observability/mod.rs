//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Poller fetch outcomes:
//!     → sink.rs (raw diagnostic lines: bodies, transport errors,
//!                the per-chain completion message)
//!     → metrics.rs (counters per chain and per probe)
//!
//! Everything else:
//!     → tracing events, initialized by logging.rs
//!
//! Consumers:
//!     → stdout via tracing-subscriber
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - The sink is a trait so tests can assert exact logged lines
//! - Metrics are cheap (atomic increments) and never alter control flow
//! - Log filter defaults come from config; RUST_LOG wins when set

pub mod logging;
pub mod metrics;
pub mod sink;

pub use sink::{DiagnosticSink, TracingSink};
