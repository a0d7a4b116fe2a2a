//! Local traffic simulation, the peer the poller probes.
//!
//! # Data Flow
//! ```text
//! GET /              → step the model once → status document
//! GET /cars          → car position snapshot
//! GET /trafficLights → light state snapshot
//! ```
//!
//! A small stand-in for the original city model: cars wander a bounded
//! grid one cardinal step at a time, refusing to enter red-light cells
//! or occupied cells; each light flips red↔green every ten steps.

pub mod http;
pub mod model;

pub use http::{router, SharedModel};
pub use model::{ModelError, TrafficModel};
