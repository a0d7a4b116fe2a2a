//! Traffic Simulation Telemetry Poller Library

pub mod config;
pub mod host;
pub mod observability;
pub mod polling;
pub mod sim;

pub use config::schema::PollerConfig;
pub use host::FrameLoop;
pub use observability::sink::{DiagnosticSink, TracingSink};
pub use polling::Poller;
