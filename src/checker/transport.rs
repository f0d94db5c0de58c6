// src/checker/transport.rs
// =============================================================================
// The network seam: something that can GET a URL and report a status code.
//
// The probe only ever talks to a `Transport`. In production that is
// `HttpTransport` (a reqwest client); in tests it is a small fake that
// returns scripted answers, counts concurrent calls, or never answers.
//
// Rust concepts:
// - Traits: describe behaviour many types can share
// - async-trait: lets a trait have async methods and still be used as
//   `dyn Transport` behind an Arc
// - From: convert reqwest's error into our own error type with `?`
// =============================================================================

use async_trait::async_trait;
use reqwest::redirect::{Attempt, Policy};
use reqwest::Client;
use std::io;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// How many redirect hops are followed before the last 3xx is reported as-is
pub const MAX_REDIRECTS: usize = 10;

// Why a transport call produced no response
//
// The probe maps each variant onto a status label:
//   Timeout    -> "Timeout"
//   Connect    -> "Connection Failed"
//   Request    -> "Request Failed"
//   Other      -> "Error"
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    /// DNS failure, connection refused or reset
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other request-level failure, including malformed URLs
    #[error("{0}")]
    Request(String),

    /// Something went wrong outside the HTTP layer
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            TransportError::Timeout
        } else if error.is_connect() || is_dropped_connection(&error) {
            TransportError::Connect(error.to_string())
        } else {
            TransportError::Request(error.to_string())
        }
    }
}

// True when the peer reset or closed the connection after it was set up
//
// reqwest only flags failures while connecting; a reset mid-request shows up
// as an io::Error or an incomplete hyper message somewhere in the source chain.
fn is_dropped_connection(error: &reqwest::Error) -> bool {
    let mut source = std::error::Error::source(error);

    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            if matches!(
                io_error.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
            ) {
                return true;
            }
        }
        if let Some(hyper_error) = cause.downcast_ref::<hyper::Error>() {
            if hyper_error.is_incomplete_message() {
                return true;
            }
        }
        source = std::error::Error::source(cause);
    }

    false
}

// Anything that can perform a single GET and return the final status code
//
// Implementations must follow redirects themselves: the status returned is
// the status of the last response in the chain.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<u16, TransportError>;
}

// The real transport, backed by reqwest
//
// One client is shared by every probe of a run, so connections to the same
// host are pooled. The client is cheap to clone (it's an Arc internally).
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    // Builds a client with the given per-request timeout
    //
    // Redirects are followed up to MAX_REDIRECTS hops. After that we stop
    // following and hand back the last 3xx response, so it gets recorded as
    // "Redirect (N)" instead of turning into an error.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::custom(stop_after_max_redirects))
            .build()?;

        Ok(HttpTransport { client })
    }
}

fn stop_after_max_redirects(attempt: Attempt) -> reqwest::redirect::Action {
    if attempt.previous().len() > MAX_REDIRECTS {
        attempt.stop()
    } else {
        attempt.follow()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<u16, TransportError> {
        // Malformed URLs fail here rather than deep inside the client
        let parsed = Url::parse(url)
            .map_err(|e| TransportError::Request(format!("Invalid URL '{}': {}", url, e)))?;

        // Only the status line matters, the body is never read
        let response = self.client.get(parsed).send().await?;
        Ok(response.status().as_u16())
    }
}
