//! Typed failures of the HTTP client adapter.

use serde_json::Value;
use thiserror::Error;

const MAX_TEXT_BODY: usize = 300;

#[derive(Error, Debug)]
pub enum ApiError {
    /// 401/403: the caller has to authenticate again.
    #[error("Not authorized ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status, .. } | ApiError::Status { status, .. } => {
                Some(*status)
            }
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Build the error for a non-2xx response.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = normalize_error_body(status, body);
        if status == 401 || status == 403 {
            ApiError::Unauthorized { status, message }
        } else {
            ApiError::Status { status, message }
        }
    }
}

/// Extract a human readable message from an error response body.
///
/// JSON bodies are searched for `message`, `error`, `detail`, `msg`,
/// `error.message` and `errors[0]`; otherwise the trimmed body text is used,
/// cut at 300 chars. An empty body becomes `HTTP <status>`.
pub fn normalize_error_body(status: u16, body: &str) -> String {
    let trimmed = body.trim();

    if let Ok(json) = serde_json::from_str::<Value>(trimmed)
        && let Some(msg) = message_from_json(&json)
    {
        return msg;
    }

    if trimmed.is_empty() {
        return format!("HTTP {status}");
    }

    if trimmed.chars().count() > MAX_TEXT_BODY {
        let cut: String = trimmed.chars().take(MAX_TEXT_BODY).collect();
        format!("{cut}…")
    } else {
        trimmed.to_string()
    }
}

fn message_from_json(json: &Value) -> Option<String> {
    for key in ["message", "error", "detail", "msg"] {
        match json.get(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.trim().to_string()),
            Some(Value::Object(_)) => {
                if let Some(inner) = json[key].get("message").and_then(Value::as_str) {
                    return Some(inner.trim().to_string());
                }
            }
            _ => {}
        }
    }

    match json.get("errors")?.as_array()?.first()? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Object(o) => o
            .get("message")
            .or_else(|| o.get("msg"))
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string()),
        _ => None,
    }
}
