//! Typed client for the quote endpoints.
//!
//! | Method | Path | Auth | Operation |
//! |--------|------|------|-----------|
//! | POST   | `/api/quote` | none | Submit a lead |
//! | GET    | `/api/admin/quotes` | basic | List leads |
//! | PATCH  | `/api/admin/quotes/{id}/status` | basic | Transition status |
//! | DELETE | `/api/admin/quotes/{id}` | basic | Delete lead |

use orbita_core::{Quote, QuoteRequest, QuoteStatus};
use reqwest::header::AUTHORIZATION;
use uuid::Uuid;

use crate::credentials::Credentials;
use crate::error::ClientError;
use crate::types::{AckResponse, SubmitQuoteResponse};

/// Client for the quote endpoints.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: url::Url,
}

impl QuoteClient {
    pub(crate) fn new(http: reqwest::Client, base_url: url::Url) -> Self {
        Self { http, base_url }
    }

    /// Submit a quote request through the public intake endpoint.
    ///
    /// Validates locally first: a request that fails the presence rules
    /// never reaches the network, and the caller keeps the entered values
    /// for retry. No authorization header is attached.
    pub async fn submit(&self, req: &QuoteRequest) -> Result<SubmitQuoteResponse, ClientError> {
        req.validate()?;

        let endpoint = "POST /api/quote";
        let url = format!("{}api/quote", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(req)
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

    /// List all leads, in the order the backend returns them.
    pub async fn list_admin(&self, auth: &Credentials) -> Result<Vec<Quote>, ClientError> {
        let endpoint = "GET /api/admin/quotes";
        let url = format!("{}api/admin/quotes", self.base_url);

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

    /// Transition a lead's status.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: QuoteStatus,
        auth: &Credentials,
    ) -> Result<AckResponse, ClientError> {
        let endpoint = format!("PATCH /api/admin/quotes/{id}/status");
        let url = format!("{}api/admin/quotes/{id}/status", self.base_url);

        let resp = self
            .http
            .patch(&url)
            .header(AUTHORIZATION, auth.authorization_header())
            .json(&serde_json::json!({ "status": status }))
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

    /// Delete a lead.
    pub async fn delete(&self, id: Uuid, auth: &Credentials) -> Result<AckResponse, ClientError> {
        let endpoint = format!("DELETE /api/admin/quotes/{id}");
        let url = format!("{}api/admin/quotes/{id}", self.base_url);

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
