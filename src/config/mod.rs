//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PollerConfig (validated, immutable)
//!     → handed to the host loop and observability at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no reload path
//! - All fields have defaults so the binary runs with no config file
//! - The polled endpoints, the 480-frame cadence, and the completion
//!   message are deliberately NOT configurable; config covers only the
//!   host frame rate and observability knobs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{HostConfig, ObservabilityConfig, PollerConfig};
