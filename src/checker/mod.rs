// src/checker/mod.rs
// =============================================================================
// This module contains all URL checking logic.
//
// Submodules:
// - result: CheckResult, StatusLabel and ProgressEvent
// - transport: the network seam (Transport trait + reqwest implementation)
// - probe: checks one URL
// - dispatch: checks many URLs with bounded concurrency
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod dispatch;
mod probe;
mod result;
mod transport;

// Re-export public items from submodules
// This lets users write `checker::check_many()` instead of
// `checker::dispatch::check_many()`
pub use dispatch::{check_many, check_many_with, ProgressFn};
pub use probe::{check_one, normalize_url, probe};
pub use result::{CheckResult, ParseLabelError, ProgressEvent, StatusLabel};
pub use transport::{HttpTransport, Transport, TransportError, MAX_REDIRECTS};
