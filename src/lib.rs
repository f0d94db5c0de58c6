// src/lib.rs
// =============================================================================
// url-404-checker: checks a batch of URLs for reachability and status.
//
// The engine API:
// - check_one(url, timeout)                               -> CheckResult
// - check_many(urls, concurrency, timeout, on_progress)   -> Vec<CheckResult>
// - summarize(results)                                    -> Summary
// - encode_report(results, summary)                       -> bytes
//
// Per-URL problems never show up as errors: they are recorded on the
// CheckResult. Only misuse (zero concurrency, zero timeout) is an Err.
// =============================================================================

pub mod checker;
pub mod error;
pub mod input;
pub mod report;

pub use checker::{check_many, check_one, CheckResult, ProgressEvent, StatusLabel};
pub use error::{EngineError, Result};
pub use report::{decode_report, encode_report, summarize, Report, Summary};
