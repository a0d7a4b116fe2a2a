//! Single GET probe against the simulation server.

use reqwest::header::CONTENT_TYPE;

use crate::observability::metrics;
use crate::observability::sink::DiagnosticSink;
use crate::polling::types::RequestResult;

/// Issue one GET and deliver its outcome to the sink.
///
/// The request carries `Content-Type: application/json` even though a GET
/// has no body; the polled server expects the header, so it is sent
/// as-is. The sink receives exactly one line per call: the raw body text
/// for any completed response (the status code is not inspected), or the
/// transport error string otherwise. The sink delivery happens before
/// this function returns, which is what keeps chain steps ordered.
pub(crate) async fn fetch_one(
    client: &reqwest::Client,
    url: &str,
    sink: &dyn DiagnosticSink,
) -> RequestResult {
    let result = match client
        .get(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
    {
        Ok(response) => match response.text().await {
            Ok(body) => RequestResult::Success(body),
            Err(e) => RequestResult::Failure(e.to_string()),
        },
        Err(e) => RequestResult::Failure(e.to_string()),
    };

    match &result {
        RequestResult::Success(body) => {
            tracing::debug!(url = %url, bytes = body.len(), "Probe returned a body");
        }
        RequestResult::Failure(error) => {
            tracing::debug!(url = %url, error = %error, "Probe failed at transport level");
        }
    }

    sink.line(result.line());
    // Label by path so the metric series stay fixed across base addresses.
    let endpoint = reqwest::Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());
    metrics::record_fetch(&endpoint, result.is_success());

    result
}
