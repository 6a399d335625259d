//! Request failures and server error-body normalization.
//!
//! Every failure of the HTTP adapter is a [`RequestError`]. Callers display
//! [`RequestError::user_message`], which prefers the server-supplied `detail`
//! and falls back to a generic message.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors produced by the HTTP client adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Server answered with an error status and a `detail` message.
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// Server answered with an error status and no usable detail.
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),

    /// A success response whose body could not be decoded.
    #[error("Invalid response from server: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Server { status, .. } | RequestError::Status { status } => Some(*status),
            RequestError::Transport(_) | RequestError::Decode(_) => None,
        }
    }

    /// Server-supplied detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            RequestError::Server { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Message shown to the user: the server detail or the generic message.
    pub fn user_message(&self) -> String {
        match self.detail() {
            Some(detail) => detail.to_string(),
            None => self.to_string(),
        }
    }

    /// Build the error for a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match extract_detail(body) {
            Some(detail) => RequestError::Server { status, detail },
            None => RequestError::Status { status },
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RequestError::Decode(err.to_string())
        } else {
            RequestError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Value,
}

/// Pull a human-readable message out of an error body.
///
/// `detail` is usually a string; validation failures carry a list of objects
/// with a `msg` field, which are joined with `"; "`.
fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = match parsed.detail {
        Value::String(text) => text,
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text.clone()),
                Value::Object(map) => map.get("msg").and_then(Value::as_str).map(String::from),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("; "),
        Value::Null => return None,
        other => other.to_string(),
    };
    let detail = detail.trim().to_string();
    (!detail.is_empty()).then_some(detail)
}
