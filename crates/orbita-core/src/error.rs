//! # Validation Errors
//!
//! Structured validation errors raised at the request boundary, built with
//! `thiserror`. A validation failure is always caught before dispatch —
//! no network call is made for a request that fails these checks.

use thiserror::Error;

/// Validation errors for request shapes and domain primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty or whitespace-only.
    #[error("{field} must not be empty")]
    MissingField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// The email value fails the minimal shape check.
    #[error("invalid email address: \"{0}\"")]
    InvalidEmail(String),

    /// The technology list parsed to zero entries.
    #[error("tech must contain at least one non-empty entry")]
    EmptyTechList,

    /// A quote status string outside the closed set was supplied.
    #[error("unknown quote status: \"{0}\" (expected new, in_progress, or completed)")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_names_the_field() {
        let err = ValidationError::MissingField { field: "name" };
        assert_eq!(format!("{err}"), "name must not be empty");
    }

    #[test]
    fn unknown_status_lists_the_valid_set() {
        let err = ValidationError::UnknownStatus("done".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("done"));
        assert!(msg.contains("in_progress"));
    }
}
