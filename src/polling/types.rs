//! Polling types and fixed endpoint constants.

/// Base URL of the simulation server. Fixed by contract, never read from
/// configuration; `Poller::with_base_url` exists for test harnesses.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

/// Outcome of a single GET probe.
///
/// Both variants carry the exact text handed to the diagnostic sink: the
/// raw response body for any completed response (status code ignored),
/// or the transport error's display string when the request never
/// completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestResult {
    /// The server produced a response; holds the raw body text.
    Success(String),
    /// The request failed at the connection/transport level.
    Failure(String),
}

impl RequestResult {
    /// The text this result contributes to the diagnostic sink.
    pub fn line(&self) -> &str {
        match self {
            RequestResult::Success(body) => body,
            RequestResult::Failure(error) => error,
        }
    }

    /// Whether a response body was obtained (regardless of status code).
    pub fn is_success(&self) -> bool {
        matches!(self, RequestResult::Success(_))
    }
}
