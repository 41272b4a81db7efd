//! # orbita-api — Axum HTTP Services for the Orbita Agency Platform
//!
//! Public quote intake and portfolio listing, plus a Basic-auth admin
//! surface for lead and portfolio management.
//!
//! ## API Surface
//!
//! | Route                               | Auth  | Module                |
//! |-------------------------------------|-------|-----------------------|
//! | `POST /api/quote`                   | none  | [`routes::quotes`]    |
//! | `GET /api/projects`                 | none  | [`routes::projects`]  |
//! | `POST /api/admin/login`             | none  | [`routes::login`]     |
//! | `GET /api/admin/quotes`             | basic | [`routes::quotes`]    |
//! | `PATCH /api/admin/quotes/{id}/status` | basic | [`routes::quotes`]  |
//! | `DELETE /api/admin/quotes/{id}`     | basic | [`routes::quotes`]    |
//! | `GET\|POST /api/admin/projects`     | basic | [`routes::projects`]  |
//! | `PUT\|DELETE /api/admin/projects/{id}` | basic | [`routes::projects`] |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → AuthMiddleware (admin routes only) → Handler
//! ```
//!
//! The client-side "logged in" flag is UX only; the auth middleware is
//! the boundary, and it runs on every admin request.

pub mod auth;
pub mod db;
pub mod error;
pub mod extractors;
pub mod geo;
pub mod notify;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes (`/health/*`), the public surface, and the OpenAPI spec
/// are mounted outside the auth middleware; every admin route sits behind
/// it.
pub fn app(state: AppState) -> Router {
    let auth_config = AuthConfig {
        admin: state.config.admin.clone(),
    };

    // Public surface.
    let public = Router::new()
        .merge(routes::quotes::public_router())
        .merge(routes::projects::public_router())
        .merge(routes::login::router())
        .merge(openapi::router());

    // Admin surface — every route re-verifies the Basic header.
    let admin = Router::new()
        .merge(routes::quotes::admin_router())
        .merge(routes::projects::admin_router())
        .layer(from_fn(auth::auth_middleware));

    // Unauthenticated health probes.
    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new()
        .merge(health)
        .merge(public)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(auth_config))
        .with_state(state)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
