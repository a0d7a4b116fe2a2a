//! HTTP assembly for the simulation server.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::sim::model::{CarSnapshot, SimStatus, TrafficLightSnapshot, TrafficModel};

/// Model shared across request handlers.
pub type SharedModel = Arc<Mutex<TrafficModel>>;

/// Build the router serving the three polled endpoints.
pub fn router(model: SharedModel) -> Router {
    Router::new()
        .route("/", get(step))
        .route("/cars", get(cars))
        .route("/trafficLights", get(traffic_lights))
        .with_state(model)
        .layer(TraceLayer::new_for_http())
}

/// Advance the model one step and report where it stands.
async fn step(State(model): State<SharedModel>) -> Json<SimStatus> {
    let mut model = model.lock().await;
    model.step();
    Json(model.status())
}

async fn cars(State(model): State<SharedModel>) -> Json<Vec<CarSnapshot>> {
    Json(model.lock().await.cars())
}

async fn traffic_lights(State(model): State<SharedModel>) -> Json<Vec<TrafficLightSnapshot>> {
    Json(model.lock().await.traffic_lights())
}
