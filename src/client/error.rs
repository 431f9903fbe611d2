use serde_json::Value;
use thiserror::Error;

/// Errors returned by [`Client`](super::Client) operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The service answered with a non-2xx status.
    ///
    /// `body` is the decoded JSON error body. A body that is not JSON is kept
    /// as [`Value::String`] holding the raw text; an empty body is [`Value::Null`].
    #[error("request failed with status {status}: {body}")]
    RequestFailed {
        /// HTTP status code.
        status: u16,
        /// Error body as returned by the service.
        body: Value,
    },

    /// Connection, TLS, timeout or body transfer failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid client configuration (API key, base URL, user agent) or a
    /// resource id that cannot form a request path.
    #[error("configuration error: {0}")]
    Config(String),

    /// A request builder was missing required data.
    #[error("builder error: {0}")]
    Builder(String),
}

impl ClientError {
    /// Build a [`ClientError::RequestFailed`] from a status and the raw body text.
    pub fn request_failed(status: u16, raw_body: &str) -> Self {
        Self::RequestFailed {
            status,
            body: parse_error_body(raw_body),
        }
    }

    /// HTTP status of a failed request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Error body of a failed request.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The `message` field of a JSON error body, or the raw text of a non-JSON body.
    pub fn message(&self) -> Option<&str> {
        match self.body()? {
            Value::String(raw) => Some(raw),
            Value::Object(map) => map.get("message").and_then(Value::as_str),
            _ => None,
        }
    }

    /// `true` for 4xx responses.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::RequestFailed { status, .. } if (400..500).contains(status))
    }

    /// `true` for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::RequestFailed { status, .. } if (500..600).contains(status))
    }
}

fn parse_error_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
