//! # Client Error Types
//!
//! Error taxonomy for the typed API client. The variants deliberately
//! separate the three failure classes callers react to differently:
//!
//! - [`ClientError::Validation`] — caught before dispatch, no network
//!   call was made.
//! - [`ClientError::Auth`] — the server rejected the credentials
//!   (401/403-class); the caller should force a re-login.
//! - [`ClientError::Http`] / [`ClientError::Api`] — transport failure or
//!   non-success status; transient, the caller may simply retry.

use thiserror::Error;

/// Errors produced by the Orbita API client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request failed local validation; no network call was made.
    #[error("validation error: {0}")]
    Validation(#[from] orbita_core::ValidationError),

    /// The server rejected the request's credentials.
    #[error("authentication failed at {endpoint}: {message}")]
    Auth {
        /// The operation that was rejected.
        endpoint: String,
        /// The server's error message.
        message: String,
    },

    /// Transport-level failure (connection refused, timeout, TLS).
    #[error("HTTP request failed at {endpoint}: {source}")]
    Http {
        /// The operation that failed.
        endpoint: String,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success, non-auth status.
    #[error("API error at {endpoint}: status {status}: {body}")]
    Api {
        /// The operation that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, for diagnostics.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// The operation whose response was malformed.
        endpoint: String,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The session file could not be read, written, or parsed.
    #[error("session store error: {0}")]
    Session(String),
}

impl ClientError {
    /// Whether this failure should force a re-login rather than be shown
    /// as a transient error.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Classify a non-success response.
    ///
    /// 401/403-class responses become [`ClientError::Auth`] so the UI can
    /// distinguish "log in again" from "try again"; everything else keeps
    /// its status and body in [`ClientError::Api`].
    pub(crate) async fn from_response(endpoint: &str, resp: reqwest::Response) -> Self {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();

        if status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
        {
            // The server wraps errors as {"error": {"code", "message"}};
            // fall back to the raw body for anything else.
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(String::from))
                .unwrap_or(body);
            return Self::Auth {
                endpoint: endpoint.to_string(),
                message,
            };
        }

        Self::Api {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
            body,
        }
    }
}
