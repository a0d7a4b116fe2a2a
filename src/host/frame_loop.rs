//! Fixed-rate tick driver for the poller.

use std::time::Duration;

use tokio::time;

use crate::config::schema::HostConfig;
use crate::polling::Poller;

/// Drives `Poller::tick()` at a fixed frame rate, forever.
pub struct FrameLoop {
    frame_rate: u32,
}

impl FrameLoop {
    /// Loop ticking `frame_rate` times per second.
    pub fn new(frame_rate: u32) -> Self {
        Self { frame_rate }
    }

    pub fn from_config(config: &HostConfig) -> Self {
        Self::new(config.frame_rate)
    }

    /// Run the frame loop. Never returns.
    ///
    /// There is no shutdown coordination: the loop runs until the
    /// process exits, matching the host lifecycle the poller came from.
    pub async fn run(self, mut poller: Poller) {
        let frame_rate = self.frame_rate.max(1);
        tracing::info!(frame_rate, "Frame loop starting");

        let mut ticker = time::interval(Duration::from_secs_f64(1.0 / f64::from(frame_rate)));

        loop {
            ticker.tick().await;
            poller.tick();
        }
    }
}
