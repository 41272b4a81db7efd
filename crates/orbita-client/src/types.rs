//! Shared response envelopes returned by the Orbita API.

use serde::Deserialize;
use uuid::Uuid;

/// Acknowledgement body for mutations that return no record.
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    /// Whether the mutation was applied.
    pub success: bool,
    /// Human-readable confirmation.
    #[serde(default)]
    pub message: String,
}

/// Response to a public quote submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitQuoteResponse {
    /// Whether the lead was stored.
    pub success: bool,
    /// Human-readable confirmation.
    #[serde(default)]
    pub message: String,
    /// Identifier of the stored lead.
    #[serde(default)]
    pub quote_id: Option<Uuid>,
}

/// Response to an admin login.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    pub success: bool,
    /// The username that authenticated.
    #[serde(default)]
    pub username: String,
}
