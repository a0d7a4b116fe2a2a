//! Traffic Simulation Telemetry Poller
//!
//! Polls a local traffic-simulation server on a fixed frame cadence and
//! logs the raw response bodies.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────┐
//!   │                      TRAFFIC POLLER                        │
//!   │                                                            │
//!   │  ┌────────────┐ tick()  ┌─────────┐ every 480th tick       │
//!   │  │ host frame │────────▶│ polling │───────────────┐        │
//!   │  │    loop    │         │ counter │               ▼        │
//!   │  └────────────┘         └─────────┘       ┌──────────────┐ │     ┌────────────┐
//!   │                                           │ fetch chain  │─┼────▶│ simulation │
//!   │                                           │ / → /cars →  │ │ GET │   server   │
//!   │                                           │/trafficLights│ │     │ :3000      │
//!   │                                           └──────┬───────┘ │     └────────────┘
//!   │                                                  ▼         │
//!   │  ┌──────────────────────────────────────────────────────┐  │
//!   │  │        Cross-Cutting: config, observability          │  │
//!   │  │   (tracing sink, Prometheus counters, TOML knobs)    │  │
//!   │  └──────────────────────────────────────────────────────┘  │
//!   └────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use traffic_poller::config::{load_config, PollerConfig};
use traffic_poller::host::FrameLoop;
use traffic_poller::observability::{logging, metrics, TracingSink};
use traffic_poller::polling::{Poller, DEFAULT_BASE_URL, FRAMES_PER_CHAIN};

#[derive(Parser)]
#[command(name = "traffic-poller")]
#[command(about = "Frame-cadenced poller for the local traffic simulation", long_about = None)]
struct Args {
    /// Path to a TOML config file; defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PollerConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);

    tracing::info!(
        base_url = DEFAULT_BASE_URL,
        frames_per_chain = FRAMES_PER_CHAIN,
        frame_rate = config.host.frame_rate,
        "traffic-poller v0.1.0 starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let poller = Poller::new(Arc::new(TracingSink));
    FrameLoop::from_config(&config.host).run(poller).await;

    Ok(())
}
