//! # Admin Login API
//!
//! Credential check for the admin console. A successful response lets the
//! client persist its session; every subsequent admin call still carries
//! and re-verifies the Basic header — this endpoint grants nothing by
//! itself.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::verify_credentials;
use crate::error::AppError;
use crate::extractors::extract_json;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

/// Login response body.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Always `true`; a failed login responds 401 with the error envelope.
    pub success: bool,
    /// The username that authenticated.
    pub username: String,
}

/// Build the login router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/admin/login", post(admin_login))
}

/// POST /api/admin/login — Verify admin credentials.
#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = LoginResponse),
        (status = 401, description = "Credentials rejected", body = crate::error::ErrorBody),
    ),
    tag = "admin"
)]
async fn admin_login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let req = extract_json(body)?;

    if verify_credentials(&req.username, &req.password, &state.config.admin) {
        tracing::info!(username = %req.username, "admin login accepted");
        Ok(Json(LoginResponse {
            success: true,
            username: req.username,
        }))
    } else {
        tracing::warn!("admin login rejected");
        // Deliberately does not say which field was wrong.
        Err(AppError::Unauthorized("invalid credentials".to_string()))
    }
}
