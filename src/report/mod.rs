// src/report/mod.rs
// =============================================================================
// Everything that happens after the checks are done:
// - summary: counts results per category
// - encode: turns results + summary into a report document
//
// Both only read the results, they never change them.
// =============================================================================

mod encode;
mod summary;

pub use encode::{decode_report, encode_report, Report, SummaryRow};
pub use summary::{summarize, Summary};
