//! Frame-cadenced poller.

use std::sync::Arc;

use crate::observability::metrics;
use crate::observability::sink::DiagnosticSink;
use crate::polling::types::{RequestResult, DEFAULT_BASE_URL};
use crate::polling::{chain, fetch};

/// Frames between fetch-chain launches.
pub const FRAMES_PER_CHAIN: u32 = 480;

/// Polls the simulation server every [`FRAMES_PER_CHAIN`] host frames.
///
/// The host invokes [`tick`](Poller::tick) once per frame; every 480th
/// frame resets the counter and spawns the fetch chain as a detached
/// task. Launches are not mutually excluded: if a chain is still in
/// flight when the counter wraps again, a second chain starts alongside
/// it.
pub struct Poller {
    ticks: u32,
    base_url: String,
    client: reqwest::Client,
    sink: Arc<dyn DiagnosticSink>,
}

impl Poller {
    /// Poller against the fixed local simulation server.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, sink)
    }

    /// Poller against an alternate base address.
    ///
    /// The probed paths and cadence stay fixed; this exists so harnesses
    /// can stand in for the simulation server.
    pub fn with_base_url(base_url: impl Into<String>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            ticks: 0,
            base_url: base_url.into(),
            // No timeout anywhere: a hung server stalls only that chain.
            client: reqwest::Client::new(),
            sink,
        }
    }

    /// Advance the frame counter by one.
    ///
    /// Returns true when this tick launched a fetch chain. The launch is
    /// a detached `tokio::spawn`; the caller is never blocked, so this
    /// must run inside a tokio runtime.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;

        if self.ticks >= FRAMES_PER_CHAIN {
            self.ticks = 0;
            self.spawn_chain();
            return true;
        }

        false
    }

    /// Current frame count since the last chain launch.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Run one fetch chain to completion on the caller's task.
    ///
    /// Same sequence `tick` spawns, exposed so callers and tests can
    /// await a full chain deterministically.
    pub async fn run_chain(&self) {
        chain::run_chain(&self.client, &self.base_url, self.sink.as_ref()).await;
    }

    /// Probe a single URL and deliver the outcome to the sink.
    pub async fn fetch_one(&self, url: &str) -> RequestResult {
        fetch::fetch_one(&self.client, url, self.sink.as_ref()).await
    }

    fn spawn_chain(&self) {
        metrics::record_chain_launched();
        tracing::debug!(frames = FRAMES_PER_CHAIN, "Launching fetch chain");

        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let sink = Arc::clone(&self.sink);

        tokio::spawn(async move {
            chain::run_chain(&client, &base_url, sink.as_ref()).await;
        });
    }
}
