//! Metrics collection and exposition.
//!
//! # Metrics
//! - `poller_chains_launched_total` (counter): fetch chains started by
//!   the tick counter
//! - `poller_chains_completed_total` (counter): chains that finished all
//!   three probes
//! - `poller_fetches_total` (counter): individual probes, labeled by
//!   endpoint path and outcome (`body` or `transport_error`)
//!
//! # Design Decisions
//! - Low-overhead metric updates (atomic operations)
//! - Recording works with or without the exporter installed

use std::net::SocketAddr;

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
///
/// Failure to install is logged, not fatal: the poller keeps running and
/// metric updates become no-ops.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            describe_counter!(
                "poller_chains_launched_total",
                "Fetch chains started by the tick counter"
            );
            describe_counter!(
                "poller_chains_completed_total",
                "Fetch chains that finished all three probes"
            );
            describe_counter!(
                "poller_fetches_total",
                "Individual GET probes by endpoint and outcome"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record that the tick counter launched a fetch chain.
pub fn record_chain_launched() {
    counter!("poller_chains_launched_total").increment(1);
}

/// Record that a fetch chain ran all three probes to completion.
pub fn record_chain_completed() {
    counter!("poller_chains_completed_total").increment(1);
}

/// Record the outcome of one probe.
pub fn record_fetch(endpoint: &str, got_body: bool) {
    let outcome = if got_body { "body" } else { "transport_error" };
    counter!(
        "poller_fetches_total",
        "endpoint" => endpoint.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}
