//! Polling subsystem.
//!
//! # Data Flow
//! ```text
//! Host frame loop:
//!     tick() once per frame
//!     → poller.rs (frame counter; every 480 frames spawn a chain)
//!
//! Fetch chain (chain.rs), one detached task per launch:
//!     GET /            → log raw body or transport error
//!     GET /cars        → log raw body or transport error
//!     GET /trafficLights → log raw body or transport error
//!     → completion line
//!
//! Single probe (fetch.rs):
//!     GET url (Content-Type: application/json, no timeout)
//!     → RequestResult → diagnostic sink
//! ```
//!
//! # Design Decisions
//! - Steps within a chain are strictly sequential; a step's logging
//!   finishes before the next GET starts
//! - Chain launches are unguarded: a slow chain does not block the
//!   counter, so chains can overlap every 480 frames
//! - Transport errors are logged and swallowed; nothing is retried and
//!   nothing aborts the chain
//! - HTTP status codes are never inspected; any response body is logged
//!   as-is

pub mod chain;
pub mod fetch;
pub mod poller;
pub mod types;

pub use poller::{Poller, FRAMES_PER_CHAIN};
pub use types::{RequestResult, DEFAULT_BASE_URL};
