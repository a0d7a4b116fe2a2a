//! The sequential three-probe fetch chain.

use crate::observability::metrics;
use crate::observability::sink::DiagnosticSink;
use crate::polling::fetch;

/// Paths probed by one chain, in this order.
pub const CHAIN_PATHS: [&str; 3] = ["/", "/cars", "/trafficLights"];

/// Line emitted to the sink after every fully finished chain.
pub const COMPLETION_MESSAGE: &str = "Funciones ejecutadas después de 480 frames.";

/// Run one full fetch chain to completion.
///
/// Probes the three endpoints strictly in order, each awaited to
/// completion (including its sink delivery) before the next starts. A
/// failed probe logs its transport error and the chain moves on
/// unconditionally. The completion line is emitted exactly once, after
/// the third probe.
pub(crate) async fn run_chain(
    client: &reqwest::Client,
    base_url: &str,
    sink: &dyn DiagnosticSink,
) {
    for path in CHAIN_PATHS {
        let url = format!("{}{}", base_url, path);
        fetch::fetch_one(client, &url, sink).await;
    }

    sink.line(COMPLETION_MESSAGE);
    metrics::record_chain_completed();
    tracing::debug!("Fetch chain finished");
}
