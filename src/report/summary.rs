// src/report/summary.rs
// =============================================================================
// Aggregate counters over a finished batch of CheckResults.
//
// Counters are computed in one pass and don't depend on the order of the
// results. Some categories overlap on purpose: an "Unknown (204)" result
// has a status code but is also counted under `other_error`.
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::checker::{CheckResult, StatusLabel};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub ok_200: usize,
    pub not_found_404: usize,
    /// 4xx except 404
    pub other_client_error_4xx: usize,
    pub server_error_5xx: usize,
    pub redirect_3xx: usize,
    pub connection_failed: usize,
    pub timeout: usize,
    /// Label is "Error" or "Unknown (N)"
    pub other_error: usize,
}

impl Summary {
    fn record(&mut self, result: &CheckResult) {
        self.total += 1;

        match result.status_code {
            Some(200) => self.ok_200 += 1,
            Some(404) => self.not_found_404 += 1,
            Some(300..=399) => self.redirect_3xx += 1,
            Some(400..=499) => self.other_client_error_4xx += 1,
            Some(500..=599) => self.server_error_5xx += 1,
            _ => {}
        }

        match result.status_label {
            StatusLabel::ConnectionFailed => self.connection_failed += 1,
            StatusLabel::Timeout => self.timeout += 1,
            StatusLabel::Error | StatusLabel::Unknown(_) => self.other_error += 1,
            _ => {}
        }
    }

    // The counters as (metric name, count), in report order
    pub fn rows(&self) -> [(&'static str, usize); 9] {
        [
            ("Total URLs", self.total),
            ("Successful (200)", self.ok_200),
            ("404 Errors", self.not_found_404),
            ("Other Client Errors (4xx)", self.other_client_error_4xx),
            ("Server Errors (5xx)", self.server_error_5xx),
            ("Redirects (3xx)", self.redirect_3xx),
            ("Connection Errors", self.connection_failed),
            ("Timeouts", self.timeout),
            ("Other Errors", self.other_error),
        ]
    }

    /// Everything that isn't a plain 200
    pub fn not_ok(&self) -> usize {
        self.total - self.ok_200
    }
}

// Computes the summary of a batch
//
// Pure and order-independent: shuffling `results` gives the same Summary.
pub fn summarize(results: &[CheckResult]) -> Summary {
    results.iter().fold(Summary::default(), |mut summary, result| {
        summary.record(result);
        summary
    })
}
