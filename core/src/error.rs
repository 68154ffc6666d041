//! Error types for the Mautic client.
//!
//! # Design
//! A non-2xx response is always `Http` with the raw status and body; the
//! client does not interpret error payloads. Callers that want Mautic's own
//! error list can ask for it with `ApiError::remote_errors`.

use serde::Deserialize;
use serde_json::Value;

/// Errors returned by every client operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a status outside 2xx.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// No response was received (DNS, connect, TLS, IO).
    #[error("HTTP transport failed: {0}")]
    Transport(#[source] ureq::Error),

    /// A 2xx response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// A 2xx response lacked a key the operation unwraps.
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),

    /// The client configuration was rejected at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Timeout(_) => Self::Timeout,
            other => Self::Transport(other),
        }
    }
}

/// One entry of the `errors` array Mautic puts in error responses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoteError {
    pub message: String,
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub details: Value,
}

#[derive(Deserialize)]
struct RemoteErrorEnvelope {
    #[serde(default)]
    errors: Vec<RemoteError>,
}

impl ApiError {
    /// HTTP status, for `Http` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Parses the `{"errors": [...]}` payload of an `Http` error.
    ///
    /// Returns an empty vec for other variants or bodies in another shape.
    pub fn remote_errors(&self) -> Vec<RemoteError> {
        let ApiError::Http { body, .. } = self else {
            return Vec::new();
        };
        serde_json::from_str::<RemoteErrorEnvelope>(body)
            .map(|envelope| envelope.errors)
            .unwrap_or_default()
    }
}
