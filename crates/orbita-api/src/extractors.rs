//! # Custom Extractors & Validation
//!
//! Provides the [`Validate`] trait for request DTOs, helpers to extract
//! + validate JSON bodies in handlers, and the [`ClientMeta`] extractor
//! that recovers the submitting client's address and user agent.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::rejection::JsonRejection;
use axum::extract::ConnectInfo;
use axum::http::request::Parts;
use axum::Json;

use crate::error::AppError;

/// Trait for request types that can validate their business rules
/// beyond what serde deserialization checks.
pub trait Validate {
    /// Validate business rules. Returns an error message on failure.
    fn validate(&self) -> Result<(), String>;
}

/// Extract a JSON body, mapping deserialization errors to [`AppError::BadRequest`].
///
/// This is the primary extraction helper. Handlers should use:
/// ```ignore
/// async fn handler(body: Result<Json<T>, JsonRejection>) -> Result<..., AppError> {
///     let req = extract_json(body)?;
///     // use req...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::BadRequest(err.body_text()))
}

/// Extract a JSON body and validate it using the [`Validate`] trait.
///
/// Combines deserialization error mapping with business rule validation.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate().map_err(AppError::Validation)?;
    Ok(value)
}

// ── ClientMeta ──────────────────────────────────────────────────────────────

/// Origin metadata for a request: the client address (X-Forwarded-For
/// first, falling back to the socket peer) and the User-Agent header.
///
/// Extraction never fails — a request with no recoverable address yields
/// `"unknown"`, which downstream geo lookup treats as unresolvable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientMeta {
    /// Best-effort client IP address.
    pub ip: String,
    /// The User-Agent header, if present and valid UTF-8.
    pub user_agent: Option<String>,
}

#[axum::async_trait]
impl<S: Send + Sync> axum::extract::FromRequestParts<S> for ClientMeta {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Proxies append to X-Forwarded-For; the first entry is the
        // original client.
        let forwarded = parts
            .headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let ip = match forwarded {
            Some(ip) => ip,
            None => parts
                .extensions
                .get::<ConnectInfo<SocketAddr>>()
                .map(|ConnectInfo(addr)| addr.ip().to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        };

        let user_agent = parts
            .headers
            .get(axum::http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Ok(Self { ip, user_agent })
    }
}
