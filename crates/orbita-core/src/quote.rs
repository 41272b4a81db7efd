//! # Lead (Quote) Domain Types
//!
//! A quote is a prospective customer's contact request: submitted through
//! the public intake endpoint, enriched server-side with origin metadata,
//! and managed by admins through status transitions until deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::ValidationError;

/// Lifecycle status of a lead.
///
/// This is a closed set: serde rejects any wire value outside it, so the
/// invariant holds on both sides of the API boundary rather than by
/// convention in a string column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Freshly submitted, not yet picked up. Every quote starts here.
    New,
    /// An admin is actively working the lead.
    InProgress,
    /// The lead has been resolved (won, lost, or closed out).
    Completed,
}

impl QuoteStatus {
    /// Return the wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

impl std::fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QuoteStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// A stored lead, as returned by the API.
///
/// `country`, `ip_address`, and `user_agent` are derived server-side from
/// the submitting request; clients never supply them. After creation only
/// `status` mutates — name, email, and message are immutable.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Quote {
    /// Opaque identifier assigned at creation.
    pub id: Uuid,
    /// Submitter's name.
    pub name: String,
    /// Submitter's contact email.
    pub email: String,
    /// Optional contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-form project description.
    pub message: String,
    /// Current lifecycle status.
    pub status: QuoteStatus,
    /// Country derived from the submitting IP, or `"Unknown"`.
    pub country: String,
    /// Observed client IP address.
    pub ip_address: String,
    /// Observed User-Agent header, if any.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Submission time.
    pub created_at: DateTime<Utc>,
}

/// A public quote submission, before server-side enrichment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuoteRequest {
    /// Submitter's name. Required.
    pub name: String,
    /// Submitter's contact email. Required.
    pub email: String,
    /// Optional contact phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form project description. Required.
    pub message: String,
}

impl QuoteRequest {
    /// Check the presence rules for a submission.
    ///
    /// Name, email, and message must be non-blank; the email gets only a
    /// minimal shape check here — full address verification is not this
    /// layer's job.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "email" });
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "message" });
        }
        let email = self.email.trim();
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}
