//! Configuration schema definitions.
//!
//! This module defines the configuration structure for the poller binary.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the telemetry poller.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PollerConfig {
    /// Host frame-loop configuration.
    pub host: HostConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Host frame-loop configuration.
///
/// The frame loop stands in for the game-engine update callback the
/// poller was written against: it invokes `Poller::tick()` once per
/// frame. Only the cadence of that loop is configurable; the number of
/// frames between fetch chains is fixed at 480.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HostConfig {
    /// Frames (ticks) per second driven into the poller.
    pub frame_rate: u32,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { frame_rate: 60 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
