//! Client-side API error type and backend error body parsing.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// Server-provided message for user-facing alerts, if the failure carried one.
    pub fn detail(&self) -> Option<String> {
        match self {
            ApiError::Http { body, .. } => try_error_detail(body),
            _ => None,
        }
    }

    /// `detail()` or the given fallback.
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or_else(|| fallback.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: DetailField,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetailField {
    Text(String),
    Validation(Vec<ValidationEntry>),
}

#[derive(Deserialize)]
struct ValidationEntry {
    msg: String,
}

/// Extract a message from a `{"detail": ...}` body. `detail` may be a plain
/// string or a list of validation entries, in which case the first `msg` wins.
pub fn try_error_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok()?;
    let detail = match parsed.detail {
        DetailField::Text(text) => text,
        DetailField::Validation(entries) => entries.into_iter().next()?.msg,
    };
    if detail.trim().is_empty() {
        None
    } else {
        Some(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail() {
        let err = ApiError::Http {
            status: 400,
            body: r#"{"detail":"Account already exists"}"#.to_string(),
        };
        assert_eq!(err.detail().as_deref(), Some("Account already exists"));
    }

    #[test]
    fn validation_detail_takes_first_msg() {
        let body = r#"{"detail":[{"loc":["body","content"],"msg":"field required","type":"missing"},{"msg":"other"}]}"#;
        assert_eq!(try_error_detail(body).as_deref(), Some("field required"));
    }

    #[test]
    fn non_json_body_falls_back() {
        let err = ApiError::Http {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(err.detail_or("Failed to add account"), "Failed to add account");
    }

    #[test]
    fn network_errors_have_no_detail() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.detail(), None);
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
