//! # orbita-client — Typed Rust client for the Orbita agency API
//!
//! Provides ergonomic, typed access to the backend REST surface:
//!
//! - **Quotes** — public intake submission plus admin lead management
//! - **Projects** — public portfolio listing plus admin portfolio CRUD
//! - **Session** — admin login and the file-backed [`CredentialStore`]
//!
//! ## Authorization
//!
//! Admin operations take a [`Credentials`] reference and derive the
//! `Authorization: Basic` header from the stored pair on every call; the
//! encoded form is never cached. A 401/403 surfaces as
//! [`ClientError::Auth`], distinct from transport failures, so callers
//! can force a re-login instead of showing a transient error.
//!
//! No operation retries automatically; a failure is reported once and
//! the caller decides whether to resubmit.

pub mod config;
pub mod credentials;
pub mod error;
pub mod projects;
pub mod quotes;
pub mod types;

pub use config::SiteConfig;
pub use credentials::{CredentialStore, Credentials};
pub use error::ClientError;

use std::time::Duration;

use crate::types::LoginResponse;

/// Top-level Orbita API client. Holds sub-clients for each resource.
#[derive(Debug, Clone)]
pub struct SiteClient {
    http: reqwest::Client,
    base_url: url::Url,
    quotes: quotes::QuoteClient,
    projects: projects::ProjectClient,
}

impl SiteClient {
    /// Create a new client from configuration.
    pub fn new(config: SiteConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            quotes: quotes::QuoteClient::new(http.clone(), config.base_url.clone()),
            projects: projects::ProjectClient::new(http.clone(), config.base_url.clone()),
            http,
            base_url: config.base_url,
        })
    }

    /// Access the quotes client.
    pub fn quotes(&self) -> &quotes::QuoteClient {
        &self.quotes
    }

    /// Access the projects client.
    pub fn projects(&self) -> &projects::ProjectClient {
        &self.projects
    }

    /// Verify an admin credential pair against the backend.
    ///
    /// A rejection surfaces as [`ClientError::Auth`] without saying which
    /// field was wrong. Most callers want [`CredentialStore::login`],
    /// which persists the session on success.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ClientError> {
        let endpoint = "POST /api/admin/login";
        let url = format!("{}api/admin/login", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
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
}
