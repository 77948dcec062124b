#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Error surfaced by every API call.
///
/// Screens render `Status` messages inline; `AuthExpired` is terminal for
/// the session (the token store is already cleared and a hard redirect to
/// the login screen has been requested by the time it is returned).
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status and a response body.
    #[error("{message}")]
    Status {
        status: u16,
        body: Value,
        message: String,
    },

    /// A 401 survived the refresh attempt; the session is invalid.
    #[error("authentication failed")]
    AuthExpired,

    /// No response was received at all (connectivity, DNS, CORS).
    #[error("network error")]
    Network,

    /// The response arrived but did not match the declared result type.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// The call was made outside a browser context.
    #[error("backend not reachable outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Effective status code. Variants without a server status are
    /// reported as a 500-class failure, except `AuthExpired` which is 401.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            Self::AuthExpired => 401,
            Self::Network | Self::Decode(_) | Self::Unavailable => 500,
        }
    }

    /// Parsed response body for `Status` errors.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Build a `Status` error from a raw response body.
///
/// The body is kept intact so screens can render server-provided detail;
/// the message is pulled from the conventional Django keys with a generic
/// fallback when the body is not JSON or carries none of them.
pub fn status_error(status: u16, raw: &str) -> ApiError {
    let body: Value = serde_json::from_str(raw).unwrap_or(Value::Null);
    let message = error_message(&body)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Status { status, body, message }
}

/// Extract a human-readable message from an error body.
///
/// Checks `detail`, then `message`, then `error`.
pub fn error_message(body: &Value) -> Option<String> {
    ["detail", "message", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(ToOwned::to_owned)
}
