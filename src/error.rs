// src/error.rs
// =============================================================================
// Errors the engine can hand back to its caller.
//
// Per-URL failures (timeouts, refused connections, 404s...) are NOT errors:
// they are recorded in a CheckResult. The only things that surface here are
// contract violations spotted before any work starts, and problems building
// or reading a report.
// =============================================================================

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// `check_many` was asked to run zero probes at a time
    #[error("concurrency must be at least 1")]
    ZeroConcurrency,

    /// A probe needs a positive timeout
    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    /// The HTTP client could not be constructed (e.g. TLS backend failure)
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// The report could not be serialized or parsed back
    #[error("report error: {0}")]
    Report(#[from] serde_json::Error),
}
