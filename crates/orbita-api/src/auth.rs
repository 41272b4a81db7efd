//! # Authentication Middleware
//!
//! HTTP Basic authentication for the admin surface.
//!
//! ## Header Format
//!
//! ```text
//! Authorization: Basic <base64(username:password)>
//! ```
//!
//! Clients rebuild the header from stored credentials on every request;
//! the server verifies it on every admin endpoint. Any client-side
//! "logged in" flag is a UX convenience only — this middleware is the
//! authorization boundary, and it runs per request.
//!
//! ## AdminIdentity
//!
//! Every authenticated request gets an [`AdminIdentity`] injected into
//! the request extensions. Handlers extract it via the
//! `FromRequestParts` impl.

use axum::extract::Request;
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use subtle::ConstantTimeEq;

use crate::error::{AppError, ErrorBody, ErrorDetail};
use crate::state::AdminCredentials;

// ── AdminIdentity ───────────────────────────────────────────────────────────

/// Identity of the authenticated admin, extracted from the auth context
/// and available to all admin route handlers via Axum's `FromRequestParts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    /// The username the request authenticated as.
    pub username: String,
}

/// Axum `FromRequestParts` implementation for `AdminIdentity`.
///
/// Extracts the identity that the auth middleware injected into extensions.
/// Returns 401 if no identity is present (middleware didn't run or failed).
#[axum::async_trait]
impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AdminIdentity {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminIdentity>()
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("no admin identity in request context".into()))
    }
}

// ── Auth Configuration ──────────────────────────────────────────────────────

/// Auth configuration injected into request extensions.
///
/// Wraps the expected admin credentials; `AdminCredentials` already
/// redacts the password in its `Debug` output.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The credentials the admin surface authenticates against.
    pub admin: AdminCredentials,
}

// ── Credential Validation ───────────────────────────────────────────────────

/// Constant-time comparison of credential fields.
///
/// Prevents timing side-channels that could reveal value length or prefix.
/// When lengths differ, performs a dummy comparison to avoid leaking length
/// information through timing variance.
fn constant_time_eq(provided: &str, expected: &str) -> bool {
    let provided = provided.as_bytes();
    let expected = expected.as_bytes();
    if provided.len() != expected.len() {
        // Dummy comparison to keep timing constant regardless of length match.
        let _ = expected.ct_eq(expected);
        return false;
    }
    provided.ct_eq(expected).into()
}

/// Verify a username/password pair against the configured credentials.
///
/// Both fields are always compared — a username mismatch must not
/// short-circuit past the password comparison. The result never reveals
/// which field was wrong.
pub fn verify_credentials(username: &str, password: &str, expected: &AdminCredentials) -> bool {
    let username_ok = constant_time_eq(username, &expected.username);
    let password_ok = constant_time_eq(password, &expected.password);
    username_ok & password_ok
}

/// Parse a `Basic <base64(username:password)>` authorization header value.
///
/// The password may itself contain `:` — only the first separator splits.
pub fn parse_basic_header(header_value: &str) -> Result<(String, String), String> {
    let encoded = header_value
        .strip_prefix("Basic ")
        .ok_or_else(|| "authorization header must use Basic scheme".to_string())?;

    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| "invalid base64 in authorization header".to_string())?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| "authorization header is not valid UTF-8".to_string())?;

    let (username, password) = decoded
        .split_once(':')
        .ok_or_else(|| "authorization header must encode username:password".to_string())?;

    Ok((username.to_string(), password.to_string()))
}

// ── Middleware ──────────────────────────────────────────────────────────────

/// Extract and verify the Basic credentials from the Authorization header.
///
/// On success, injects [`AdminIdentity`] into request extensions for
/// downstream handlers. On any failure, responds 401 with a structured
/// JSON body; the message never reveals whether the username or the
/// password was wrong.
pub async fn auth_middleware(mut request: Request, next: Next) -> Response {
    let config = request.extensions().get::<AuthConfig>().cloned();

    let Some(config) = config else {
        tracing::error!("auth middleware running without AuthConfig extension");
        return unauthorized_response("server authentication misconfigured");
    };

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    match auth_header {
        Some(header_value) => match parse_basic_header(header_value) {
            Ok((username, password)) => {
                if verify_credentials(&username, &password, &config.admin) {
                    request.extensions_mut().insert(AdminIdentity { username });
                    next.run(request).await
                } else {
                    tracing::warn!("authentication failed: invalid credentials");
                    unauthorized_response("invalid credentials")
                }
            }
            Err(msg) => {
                tracing::warn!(reason = %msg, "authentication failed: malformed header");
                unauthorized_response(&msg)
            }
        },
        None => {
            tracing::warn!("authentication failed: missing authorization header");
            unauthorized_response("missing authorization header")
        }
    }
}

fn unauthorized_response(message: &str) -> Response {
    let body = ErrorBody {
        error: ErrorDetail {
            code: "UNAUTHORIZED".to_string(),
            message: message.to_string(),
        },
    };
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
