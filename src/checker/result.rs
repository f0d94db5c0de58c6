// src/checker/result.rs
// =============================================================================
// The data model shared by the probe, the dispatcher and the report.
//
// - StatusLabel: the human-readable classification of one check
// - CheckResult: the outcome record for one input URL
// - ProgressEvent: one "a URL just finished" notification
//
// Rust concepts:
// - Enums with data: Redirect(301) carries the status code it describes
// - Traits (Display, FromStr): convert labels to and from text
// - serde attributes: control how our types look in JSON
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Classification of a single check
//
// The Display output is exactly what ends up in reports, e.g.
// "Redirect (301)" or "Connection Failed". serde goes through the same
// text so a report can be read back into these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum StatusLabel {
    /// 200
    Ok,
    /// 404
    NotFound,
    /// Final response was a 3xx
    Redirect(u16),
    /// 4xx other than 404
    ClientError(u16),
    /// 5xx
    ServerError(u16),
    /// Any other status code (1xx, 2xx other than 200, >= 600)
    Unknown(u16),
    /// No response before the timeout expired
    Timeout,
    /// DNS failure, refused or reset connection
    ConnectionFailed,
    /// Any other transport-level failure
    RequestFailed,
    /// Failure outside the transport layer
    Error,
}

impl StatusLabel {
    // Maps an HTTP status code to its label
    //
    // This is a pure function of the code: 301 is always "Redirect (301)",
    // 418 is always "Client Error (418)" and so on.
    pub fn from_status_code(code: u16) -> Self {
        match code {
            200 => StatusLabel::Ok,
            404 => StatusLabel::NotFound,
            300..=399 => StatusLabel::Redirect(code),
            400..=499 => StatusLabel::ClientError(code),
            500..=599 => StatusLabel::ServerError(code),
            _ => StatusLabel::Unknown(code),
        }
    }

    /// True for the labels a probe produces when no response was obtained
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            StatusLabel::Timeout
                | StatusLabel::ConnectionFailed
                | StatusLabel::RequestFailed
                | StatusLabel::Error
        )
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusLabel::Ok => write!(f, "OK"),
            StatusLabel::NotFound => write!(f, "Not Found"),
            StatusLabel::Redirect(code) => write!(f, "Redirect ({})", code),
            StatusLabel::ClientError(code) => write!(f, "Client Error ({})", code),
            StatusLabel::ServerError(code) => write!(f, "Server Error ({})", code),
            StatusLabel::Unknown(code) => write!(f, "Unknown ({})", code),
            StatusLabel::Timeout => write!(f, "Timeout"),
            StatusLabel::ConnectionFailed => write!(f, "Connection Failed"),
            StatusLabel::RequestFailed => write!(f, "Request Failed"),
            StatusLabel::Error => write!(f, "Error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized status label: {0:?}")]
pub struct ParseLabelError(String);

impl FromStr for StatusLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OK" => return Ok(StatusLabel::Ok),
            "Not Found" => return Ok(StatusLabel::NotFound),
            "Timeout" => return Ok(StatusLabel::Timeout),
            "Connection Failed" => return Ok(StatusLabel::ConnectionFailed),
            "Request Failed" => return Ok(StatusLabel::RequestFailed),
            "Error" => return Ok(StatusLabel::Error),
            _ => {}
        }

        // The remaining labels look like "Name (123)"
        let err = || ParseLabelError(s.to_string());
        let (name, rest) = s.split_once(" (").ok_or_else(err)?;
        let code: u16 = rest
            .strip_suffix(')')
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(err)?;

        match name {
            "Redirect" => Ok(StatusLabel::Redirect(code)),
            "Client Error" => Ok(StatusLabel::ClientError(code)),
            "Server Error" => Ok(StatusLabel::ServerError(code)),
            "Unknown" => Ok(StatusLabel::Unknown(code)),
            _ => Err(err()),
        }
    }
}

impl From<StatusLabel> for String {
    fn from(label: StatusLabel) -> Self {
        label.to_string()
    }
}

impl TryFrom<String> for StatusLabel {
    type Error = ParseLabelError;

    fn try_from(value: String) -> Result<Self, ParseLabelError> {
        value.parse()
    }
}

// The outcome of checking one URL
//
// Exactly one of `status_code` / `error_message` is set:
// - a response was received (any status, even 404 or 500) -> status_code
// - no response was received -> error_message
// Use the two constructors below rather than building the struct by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The URL exactly as the caller supplied it (before adding http://)
    pub url: String,
    pub status_code: Option<u16>,
    pub status_label: StatusLabel,
    pub error_message: Option<String>,
    /// Round-trip time in seconds, only for received responses
    pub response_time_seconds: Option<f64>,
}

impl CheckResult {
    /// A check that got an HTTP response back
    pub fn responded(url: impl Into<String>, status_code: u16, response_time_seconds: f64) -> Self {
        CheckResult {
            url: url.into(),
            status_code: Some(status_code),
            status_label: StatusLabel::from_status_code(status_code),
            error_message: None,
            response_time_seconds: Some(response_time_seconds),
        }
    }

    /// A check that never got a response
    pub fn failed(url: impl Into<String>, label: StatusLabel, message: impl Into<String>) -> Self {
        debug_assert!(label.is_failure(), "{} is not a failure label", label);
        CheckResult {
            url: url.into(),
            status_code: None,
            status_label: label,
            error_message: Some(message.into()),
            response_time_seconds: None,
        }
    }

    /// True only for a plain 200 OK
    pub fn is_ok(&self) -> bool {
        self.status_label == StatusLabel::Ok
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }
}

/// Emitted once per finished URL, in completion order
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    /// 1 for the first URL to finish, `total` for the last
    pub completed: usize,
    pub total: usize,
    pub url: String,
    pub status_label: StatusLabel,
}

impl ProgressEvent {
    /// Fraction done, between 0.0 and 1.0
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_by_status_code() {
        assert_eq!(StatusLabel::from_status_code(200).to_string(), "OK");
        assert_eq!(StatusLabel::from_status_code(404).to_string(), "Not Found");
        assert_eq!(StatusLabel::from_status_code(301).to_string(), "Redirect (301)");
        assert_eq!(StatusLabel::from_status_code(418).to_string(), "Client Error (418)");
        assert_eq!(StatusLabel::from_status_code(503).to_string(), "Server Error (503)");
        assert_eq!(StatusLabel::from_status_code(204).to_string(), "Unknown (204)");
        assert_eq!(StatusLabel::from_status_code(101).to_string(), "Unknown (101)");
        assert_eq!(StatusLabel::from_status_code(600).to_string(), "Unknown (600)");
    }

    #[test]
    fn test_label_parses_back_from_text() {
        let labels = [
            StatusLabel::Ok,
            StatusLabel::NotFound,
            StatusLabel::Redirect(308),
            StatusLabel::ClientError(410),
            StatusLabel::ServerError(502),
            StatusLabel::Unknown(199),
            StatusLabel::Timeout,
            StatusLabel::ConnectionFailed,
            StatusLabel::RequestFailed,
            StatusLabel::Error,
        ];
        for label in labels {
            assert_eq!(label.to_string().parse::<StatusLabel>(), Ok(label));
        }
    }

    #[test]
    fn test_label_rejects_garbage() {
        assert!("Redirect".parse::<StatusLabel>().is_err());
        assert!("Redirect (abc)".parse::<StatusLabel>().is_err());
        assert!("Teapot (418)".parse::<StatusLabel>().is_err());
        assert!("".parse::<StatusLabel>().is_err());
    }

    #[test]
    fn test_label_from_owned_string() {
        assert_eq!(
            StatusLabel::try_from("Server Error (503)".to_string()),
            Ok(StatusLabel::ServerError(503))
        );
        assert_eq!(StatusLabel::try_from("Error".to_string()), Ok(StatusLabel::Error));
        assert!(StatusLabel::try_from("nonsense".to_string()).is_err());

        let decoded: CheckResult = serde_json::from_str(
            r#"{"url":"a.com","status_code":null,"status_label":"Connection Failed",
                "error_message":"Connection Error","response_time_seconds":null}"#,
        )
        .unwrap();
        assert_eq!(decoded.status_label, StatusLabel::ConnectionFailed);
    }

    #[test]
    fn test_result_has_code_or_error_never_both() {
        let ok = CheckResult::responded("example.com", 500, 0.25);
        assert_eq!(ok.status_code, Some(500));
        assert!(ok.error_message.is_none());
        assert_eq!(ok.status_label, StatusLabel::ServerError(500));

        let failed = CheckResult::failed("example.com", StatusLabel::Timeout, "Request Timeout");
        assert!(failed.status_code.is_none());
        assert_eq!(failed.error_message.as_deref(), Some("Request Timeout"));
        assert!(failed.response_time_seconds.is_none());
    }

    #[test]
    fn test_label_serializes_as_text() {
        let result = CheckResult::responded("a.com", 302, 0.1);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status_label"], "Redirect (302)");
        assert_eq!(json["error_message"], serde_json::Value::Null);
    }
}
