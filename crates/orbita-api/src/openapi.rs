//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Orbita Agency API",
        version = "0.3.2",
        description = "Public quote intake and portfolio listing, plus the Basic-auth admin surface for lead and portfolio management.",
        license(name = "MIT")
    ),
    paths(
        // Quotes
        crate::routes::quotes::submit_quote,
        crate::routes::quotes::list_quotes,
        crate::routes::quotes::update_quote_status,
        crate::routes::quotes::delete_quote,
        // Projects
        crate::routes::projects::list_projects_public,
        crate::routes::projects::list_projects_admin,
        crate::routes::projects::create_project,
        crate::routes::projects::update_project,
        crate::routes::projects::delete_project,
        // Admin session
        crate::routes::login::admin_login,
    ),
    components(schemas(
        // Domain types
        orbita_core::Quote,
        orbita_core::QuoteStatus,
        orbita_core::QuoteRequest,
        orbita_core::Project,
        orbita_core::ProjectDraft,
        orbita_core::TechList,
        // Error types
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        // DTOs
        crate::routes::AckResponse,
        crate::routes::quotes::SubmitQuoteResponse,
        crate::routes::quotes::StatusUpdateRequest,
        crate::routes::login::LoginRequest,
        crate::routes::login::LoginResponse,
    )),
    tags(
        (name = "quotes", description = "Quote intake and lead management"),
        (name = "projects", description = "Portfolio management"),
        (name = "admin", description = "Admin session"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
