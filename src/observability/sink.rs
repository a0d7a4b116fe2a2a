//! Diagnostic sink for raw poller output.
//!
//! The poller reports three kinds of plain text lines: response bodies,
//! transport error strings, and the fixed per-chain completion message.
//! The sink is the collaborator that receives them; production forwards
//! to tracing, tests substitute a capturing implementation.

/// Receives the poller's diagnostic lines.
pub trait DiagnosticSink: Send + Sync {
    /// Deliver one plain text line.
    fn line(&self, line: &str);
}

/// Sink that forwards every line to the tracing pipeline at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn line(&self, line: &str) {
        tracing::info!("{}", line);
    }
}
