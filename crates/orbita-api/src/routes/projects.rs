//! # Portfolio Project API
//!
//! Public portfolio listing and admin portfolio CRUD. The create and
//! edit payloads share [`ProjectDraft`]; the server assigns identifiers
//! and creation times. Listings are newest-first on both the public and
//! admin surfaces.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Utc;
use orbita_core::{Project, ProjectDraft};
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::routes::AckResponse;
use crate::state::AppState;

impl Validate for ProjectDraft {
    fn validate(&self) -> Result<(), String> {
        ProjectDraft::validate(self).map_err(|e| e.to_string())
    }
}

/// Build the public projects router.
pub fn public_router() -> Router<AppState> {
    Router::new().route("/api/projects", get(list_projects_public))
}

/// Build the admin projects router. Mounted behind the auth middleware.
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin/projects",
            get(list_projects_admin).post(create_project),
        )
        .route(
            "/api/admin/projects/:id",
            put(update_project).delete(delete_project),
        )
}

fn sorted_projects(state: &AppState) -> Vec<Project> {
    let mut projects = state.projects.list();
    projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    projects
}

/// GET /api/projects — Public portfolio listing, newest first.
#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "All portfolio entries, newest first", body = [Project]),
    ),
    tag = "projects"
)]
async fn list_projects_public(State(state): State<AppState>) -> Json<Vec<Project>> {
    Json(sorted_projects(&state))
}

/// GET /api/admin/projects — Admin portfolio listing, newest first.
#[utoipa::path(
    get,
    path = "/api/admin/projects",
    responses(
        (status = 200, description = "All portfolio entries, newest first", body = [Project]),
        (status = 401, description = "Missing or invalid credentials", body = crate::error::ErrorBody),
    ),
    tag = "projects"
)]
async fn list_projects_admin(
    State(state): State<AppState>,
    _identity: AdminIdentity,
) -> Json<Vec<Project>> {
    Json(sorted_projects(&state))
}

/// POST /api/admin/projects — Create a portfolio entry.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    request_body = ProjectDraft,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 422, description = "Draft failed validation", body = crate::error::ErrorBody),
    ),
    tag = "projects"
)]
async fn create_project(
    State(state): State<AppState>,
    _identity: AdminIdentity,
    body: Result<Json<ProjectDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let draft = extract_validated_json(body)?;

    let project = Project {
        id: Uuid::new_v4(),
        title: draft.title,
        description: draft.description,
        tech: draft.tech,
        image: draft.image,
        link: draft.link.filter(|l| !l.trim().is_empty()),
        created_at: Utc::now(),
    };

    state.projects.insert(project.id, project.clone());
    if let Some(pool) = &state.db_pool {
        crate::db::projects::insert(pool, &project).await?;
    }

    tracing::info!(project_id = %project.id, title = %project.title, "project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/admin/projects/{id} — Replace a portfolio entry's fields.
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    params(("id" = Uuid, Path, description = "Project identifier")),
    request_body = ProjectDraft,
    responses(
        (status = 200, description = "Updated project", body = Project),
        (status = 404, description = "No such project", body = crate::error::ErrorBody),
        (status = 422, description = "Draft failed validation", body = crate::error::ErrorBody),
    ),
    tag = "projects"
)]
async fn update_project(
    State(state): State<AppState>,
    _identity: AdminIdentity,
    Path(id): Path<Uuid>,
    body: Result<Json<ProjectDraft>, JsonRejection>,
) -> Result<Json<Project>, AppError> {
    let draft = extract_validated_json(body)?;
    let link = draft.link.filter(|l| !l.trim().is_empty());

    let updated = state
        .projects
        .update(&id, |project| {
            project.title = draft.title;
            project.description = draft.description;
            project.tech = draft.tech;
            project.image = draft.image;
            project.link = link;
        })
        .ok_or_else(|| AppError::NotFound(format!("project {id}")))?;

    if let Some(pool) = &state.db_pool {
        crate::db::projects::update(pool, &updated).await?;
    }

    tracing::info!(project_id = %id, "project updated");
    Ok(Json(updated))
}

/// DELETE /api/admin/projects/{id} — Delete a portfolio entry.
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    params(("id" = Uuid, Path, description = "Project identifier")),
    responses(
        (status = 200, description = "Project deleted", body = AckResponse),
        (status = 404, description = "No such project", body = crate::error::ErrorBody),
    ),
    tag = "projects"
)]
async fn delete_project(
    State(state): State<AppState>,
    _identity: AdminIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<AckResponse>, AppError> {
    state
        .projects
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("project {id}")))?;

    if let Some(pool) = &state.db_pool {
        crate::db::projects::delete(pool, id).await?;
    }

    tracing::info!(project_id = %id, "project deleted");
    Ok(Json(AckResponse {
        success: true,
        message: "Project deleted".to_string(),
    }))
}
