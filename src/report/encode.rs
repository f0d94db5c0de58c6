// src/report/encode.rs
// =============================================================================
// Renders a batch of results into a downloadable report document.
//
// The document is a JSON "workbook" with three sheets, always in this order:
//   "All URLs"    every result
//   "404 Errors"  results with status code 404 (left out when there are none)
//   "Summary"     one {metric, count} row per Summary counter
//
// Same input, same bytes: nothing time-dependent goes into the document, so
// a report can be decoded and compared against what produced it.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::summary::Summary;
use crate::checker::CheckResult;
use crate::error::Result;

/// One line of the "Summary" sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub metric: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "All URLs")]
    pub all_urls: Vec<CheckResult>,

    #[serde(rename = "404 Errors", default, skip_serializing_if = "Vec::is_empty")]
    pub not_found: Vec<CheckResult>,

    #[serde(rename = "Summary")]
    pub summary: Vec<SummaryRow>,
}

impl Report {
    pub fn new(results: &[CheckResult], summary: &Summary) -> Self {
        Report {
            all_urls: results.to_vec(),
            not_found: results.iter().filter(|r| r.is_not_found()).cloned().collect(),
            summary: summary_rows(summary),
        }
    }
}

fn summary_rows(summary: &Summary) -> Vec<SummaryRow> {
    summary
        .rows()
        .iter()
        .map(|(metric, count)| SummaryRow {
            metric: metric.to_string(),
            count: *count,
        })
        .collect()
}

// Serializes results + summary into report bytes
pub fn encode_report(results: &[CheckResult], summary: &Summary) -> Result<Vec<u8>> {
    let report = Report::new(results, summary);
    let mut bytes = serde_json::to_vec_pretty(&report)?;
    bytes.push(b'\n');
    Ok(bytes)
}

// Parses report bytes back into a Report
pub fn decode_report(bytes: &[u8]) -> Result<Report> {
    Ok(serde_json::from_slice(bytes)?)
}
