//! Typed client for the portfolio endpoints.
//!
//! | Method | Path | Auth | Operation |
//! |--------|------|------|-----------|
//! | GET    | `/api/projects` | none | Public portfolio listing |
//! | GET    | `/api/admin/projects` | basic | Admin listing |
//! | POST   | `/api/admin/projects` | basic | Create entry |
//! | PUT    | `/api/admin/projects/{id}` | basic | Replace entry fields |
//! | DELETE | `/api/admin/projects/{id}` | basic | Delete entry |

use orbita_core::{Project, ProjectDraft};
use reqwest::header::AUTHORIZATION;
use uuid::Uuid;

use crate::credentials::Credentials;
use crate::error::ClientError;
use crate::types::AckResponse;

/// Client for the portfolio endpoints.
#[derive(Debug, Clone)]
pub struct ProjectClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl ProjectClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// List the public portfolio, in the order the backend returns it.
    pub async fn list(&self) -> Result<Vec<Project>, ClientError> {
        let endpoint = "GET /api/projects";
        let url = format!("{}api/projects", self.base_url);

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(ClientError::from_response(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// List all portfolio entries through the admin surface.
    pub async fn list_admin(&self, auth: &Credentials) -> Result<Vec<Project>, ClientError> {
        let endpoint = "GET /api/admin/projects";
        let url = format!("{}api/admin/projects", self.base_url);

        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, auth.authorization_header())
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(ClientError::from_response(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Create a portfolio entry. Validates the draft before dispatch.
    pub async fn create(
        &self,
        draft: &ProjectDraft,
        auth: &Credentials,
    ) -> Result<Project, ClientError> {
        draft.validate()?;

        let endpoint = "POST /api/admin/projects";
        let url = format!("{}api/admin/projects", self.base_url);

        let resp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, auth.authorization_header())
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.into(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(ClientError::from_response(endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint: endpoint.into(),
            source: e,
        })
    }

    /// Replace a portfolio entry's fields. Validates the draft before
    /// dispatch and returns the updated record.
    pub async fn update(
        &self,
        id: Uuid,
        draft: &ProjectDraft,
        auth: &Credentials,
    ) -> Result<Project, ClientError> {
        draft.validate()?;

        let endpoint = format!("PUT /api/admin/projects/{id}");
        let url = format!("{}api/admin/projects/{id}", self.base_url);

        let resp = self
            .http
            .put(&url)
            .header(AUTHORIZATION, auth.authorization_header())
            .json(draft)
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(ClientError::from_response(&endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint,
            source: e,
        })
    }

    /// Delete a portfolio entry.
    pub async fn delete(&self, id: Uuid, auth: &Credentials) -> Result<AckResponse, ClientError> {
        let endpoint = format!("DELETE /api/admin/projects/{id}");
        let url = format!("{}api/admin/projects/{id}", self.base_url);

        let resp = self
            .http
            .delete(&url)
            .header(AUTHORIZATION, auth.authorization_header())
            .send()
            .await
            .map_err(|e| ClientError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            return Err(ClientError::from_response(&endpoint, resp).await);
        }

        resp.json().await.map_err(|e| ClientError::Deserialization {
            endpoint,
            source: e,
        })
    }
}
