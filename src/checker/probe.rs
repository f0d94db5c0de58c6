// src/checker/probe.rs
// =============================================================================
// One probe = one GET against one URL, turned into a CheckResult.
//
// Key functionality:
// - Adds "http://" to URLs that have no scheme
// - Times the round trip for responses that come back
// - Classifies every outcome, including failures, into a CheckResult
//
// A probe never returns an error to its caller. Whatever happens on the
// wire ends up as a label (+ error message) on the result.
// =============================================================================

use log::debug;
use std::time::{Duration, Instant};

use super::result::{CheckResult, StatusLabel};
use super::transport::{HttpTransport, Transport, TransportError};
use crate::error::{EngineError, Result};

// Adds http:// when the URL has neither http:// nor https://
//
// Nothing else is touched: no trimming, no encoding fixes. A broken URL is
// left broken so the transport can report it.
//
// Examples:
//   "example.com/page"     -> "http://example.com/page"
//   "https://example.com"  -> "https://example.com"
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

// Checks a single URL through the given transport
//
// Parameters:
//   transport: where the GET actually goes
//   url: the URL as the caller wrote it (kept verbatim in the result)
//   timeout: upper bound for the whole call
pub async fn probe(transport: &dyn Transport, url: &str, timeout: Duration) -> CheckResult {
    let target = normalize_url(url);
    let start = Instant::now();

    // The transport should time out on its own; this outer timeout makes
    // sure no transport can hold a worker longer than `timeout`.
    let outcome = match tokio::time::timeout(timeout, transport.get(&target)).await {
        Ok(outcome) => outcome,
        Err(_elapsed) => Err(TransportError::Timeout),
    };

    let result = match outcome {
        Ok(status_code) => {
            let elapsed = round_to_hundredths(start.elapsed().as_secs_f64());
            CheckResult::responded(url, status_code, elapsed)
        }
        Err(error) => classify_failure(url, error),
    };

    debug!("{} -> {}", target, result.status_label);
    result
}

// Single-URL entry point with the real HTTP transport
//
// Only fails for a zero timeout or if the HTTP client can't be built.
pub async fn check_one(url: &str, timeout: Duration) -> Result<CheckResult> {
    if timeout.is_zero() {
        return Err(EngineError::ZeroTimeout);
    }

    let transport = HttpTransport::new(timeout)?;
    Ok(probe(&transport, url, timeout).await)
}

// Turns a transport failure into a result with no status code
fn classify_failure(url: &str, error: TransportError) -> CheckResult {
    match error {
        TransportError::Timeout => {
            CheckResult::failed(url, StatusLabel::Timeout, "Request Timeout")
        }
        TransportError::Connect(_) => {
            CheckResult::failed(url, StatusLabel::ConnectionFailed, "Connection Error")
        }
        TransportError::Request(message) => {
            CheckResult::failed(url, StatusLabel::RequestFailed, message)
        }
        TransportError::Other(message) => CheckResult::failed(url, StatusLabel::Error, message),
    }
}

fn round_to_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
