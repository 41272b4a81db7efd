//! # Quote API
//!
//! Public quote intake and admin lead management. A submission is
//! enriched server-side (client IP, geo-derived country, user agent),
//! stored with status `new`, and announced on Telegram best-effort.
//! Admin endpoints list leads newest-first, apply status transitions,
//! and delete.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use chrono::Utc;
use orbita_core::{Quote, QuoteRequest, QuoteStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::error::AppError;
use crate::extractors::{extract_json, extract_validated_json, ClientMeta, Validate};
use crate::routes::AckResponse;
use crate::state::AppState;

impl Validate for QuoteRequest {
    fn validate(&self) -> Result<(), String> {
        QuoteRequest::validate(self).map_err(|e| e.to_string())
    }
}

/// Response to a public quote submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitQuoteResponse {
    /// Always `true`; failures use the error envelope.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
    /// Identifier of the stored lead.
    pub quote_id: Uuid,
}

/// Status transition request for a lead.
#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusUpdateRequest {
    /// The new status. The closed enum rejects anything outside
    /// `{new, in_progress, completed}` at deserialization time.
    pub status: QuoteStatus,
}

/// Build the public quote router.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/api/quote", post(submit_quote))
}

/// Build the admin quote router. Mounted behind the auth middleware.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/quotes", get(list_quotes))
        .route("/api/admin/quotes/:id/status", patch(update_quote_status))
        .route("/api/admin/quotes/:id", delete(delete_quote))
}

/// POST /api/quote — Submit a quote request.
#[utoipa::path(
    post,
    path = "/api/quote",
    request_body = QuoteRequest,
    responses(
        (status = 200, description = "Lead stored", body = SubmitQuoteResponse),
        (status = 422, description = "Missing required field", body = crate::error::ErrorBody),
    ),
    tag = "quotes"
)]
async fn submit_quote(
    State(state): State<AppState>,
    meta: ClientMeta,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<SubmitQuoteResponse>, AppError> {
    let req = extract_validated_json(body)?;

    let country = state.geo.lookup_country(&meta.ip).await;
    let quote = Quote {
        id: Uuid::new_v4(),
        name: req.name,
        email: req.email,
        phone: req.phone.filter(|p| !p.trim().is_empty()),
        message: req.message,
        status: QuoteStatus::New,
        country,
        ip_address: meta.ip,
        user_agent: meta.user_agent,
        created_at: Utc::now(),
    };

    state.quotes.insert(quote.id, quote.clone());
    if let Some(pool) = &state.db_pool {
        crate::db::quotes::insert(pool, &quote).await?;
    }

    // Fire-and-forget: a Telegram outage must not fail the submission.
    if let Some(notifier) = state.notifier.clone() {
        let announced = quote.clone();
        tokio::spawn(async move { notifier.notify_quote(&announced).await });
    }

    tracing::info!(quote_id = %quote.id, email = %quote.email, "quote created");

    Ok(Json(SubmitQuoteResponse {
        success: true,
        message: "Quote submitted successfully".to_string(),
        quote_id: quote.id,
    }))
}

/// GET /api/admin/quotes — List all leads, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/quotes",
    responses(
        (status = 200, description = "All leads, newest first", body = [Quote]),
        (status = 401, description = "Missing or invalid credentials", body = crate::error::ErrorBody),
    ),
    tag = "quotes"
)]
async fn list_quotes(
    State(state): State<AppState>,
    _identity: AdminIdentity,
) -> Json<Vec<Quote>> {
    let mut quotes = state.quotes.list();
    quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Json(quotes)
}

/// PATCH /api/admin/quotes/{id}/status — Transition a lead's status.
#[utoipa::path(
    patch,
    path = "/api/admin/quotes/{id}/status",
    params(("id" = Uuid, Path, description = "Lead identifier")),
    request_body = StatusUpdateRequest,
    responses(
        (status = 200, description = "Status updated", body = AckResponse),
        (status = 404, description = "No such lead", body = crate::error::ErrorBody),
    ),
    tag = "quotes"
)]
async fn update_quote_status(
    State(state): State<AppState>,
    _identity: AdminIdentity,
    Path(id): Path<Uuid>,
    body: Result<Json<StatusUpdateRequest>, JsonRejection>,
) -> Result<Json<AckResponse>, AppError> {
    let req = extract_json(body)?;

    state
        .quotes
        .update(&id, |quote| quote.status = req.status)
        .ok_or_else(|| AppError::NotFound(format!("quote {id}")))?;

    if let Some(pool) = &state.db_pool {
        crate::db::quotes::update_status(pool, id, req.status).await?;
    }

    tracing::info!(quote_id = %id, status = %req.status, "quote status updated");
    Ok(Json(AckResponse {
        success: true,
        message: "Status updated".to_string(),
    }))
}

/// DELETE /api/admin/quotes/{id} — Delete a lead.
#[utoipa::path(
    delete,
    path = "/api/admin/quotes/{id}",
    params(("id" = Uuid, Path, description = "Lead identifier")),
    responses(
        (status = 200, description = "Lead deleted", body = AckResponse),
        (status = 404, description = "No such lead", body = crate::error::ErrorBody),
    ),
    tag = "quotes"
)]
async fn delete_quote(
    State(state): State<AppState>,
    _identity: AdminIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<AckResponse>, AppError> {
    state
        .quotes
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("quote {id}")))?;

    if let Some(pool) = &state.db_pool {
        crate::db::quotes::delete(pool, id).await?;
    }

    tracing::info!(quote_id = %id, "quote deleted");
    Ok(Json(AckResponse {
        success: true,
        message: "Quote deleted".to_string(),
    }))
}
