//! Local traffic-simulation server.
//!
//! Development peer for the poller: serves the three polled endpoints
//! from an in-memory model. `GET /` advances the model one step;
//! `/cars` and `/trafficLights` are read-only snapshots.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::sync::Mutex;

use traffic_poller::observability::logging;
use traffic_poller::sim::{router, TrafficModel};

#[derive(Parser)]
#[command(name = "sim-server")]
#[command(about = "Serves the traffic model the poller probes", long_about = None)]
struct Args {
    /// Port to listen on; the poller probes 3000.
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Number of cars wandering the grid.
    #[arg(long, default_value_t = 5)]
    cars: usize,

    /// Grid width and height.
    #[arg(long, default_value_t = 24)]
    grid: i32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logging::init_logging("info");

    let model = Arc::new(Mutex::new(TrafficModel::new(args.grid, args.grid, args.cars)?));
    let app = router(model);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!(address = %addr, cars = args.cars, "Simulation server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
