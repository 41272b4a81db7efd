//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! ## Architecture
//!
//! AppState holds the two collections this service owns:
//! - **Quotes** — leads submitted through the public intake endpoint
//! - **Projects** — portfolio entries managed through the admin surface
//!
//! plus the outbound geo-lookup client, the optional Telegram notifier,
//! the optional Postgres pool, and application configuration. The stores
//! are in-memory and authoritative at request time; when a pool is
//! present, mutations write through and startup hydrates from the
//! database.

use std::collections::HashMap;
use std::sync::Arc;

use orbita_core::{Project, Quote};
use parking_lot::RwLock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::geo::GeoClient;
use crate::notify::TelegramNotifier;

// -- Generic In-Memory Store --------------------------------------------------

/// Thread-safe, cloneable in-memory key-value store.
///
/// All operations are synchronous (the RwLock is `parking_lot`, not
/// `tokio::sync`) because we never hold the lock across `.await` points.
/// `parking_lot::RwLock` is non-poisonable — a panicking writer does not
/// permanently corrupt the store.
#[derive(Debug)]
pub struct Store<T: Clone + Send + Sync> {
    data: Arc<RwLock<HashMap<Uuid, T>>>,
}

impl<T: Clone + Send + Sync> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
        }
    }
}

impl<T: Clone + Send + Sync> Store<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a record, returning the previous value if the key existed.
    pub fn insert(&self, id: Uuid, value: T) -> Option<T> {
        self.data.write().insert(id, value)
    }

    /// Retrieve a record by ID.
    pub fn get(&self, id: &Uuid) -> Option<T> {
        self.data.read().get(id).cloned()
    }

    /// List all records.
    pub fn list(&self) -> Vec<T> {
        self.data.read().values().cloned().collect()
    }

    /// Update a record in place. Returns the updated record, or `None` if not found.
    pub fn update(&self, id: &Uuid, f: impl FnOnce(&mut T)) -> Option<T> {
        let mut guard = self.data.write();
        if let Some(entry) = guard.get_mut(id) {
            f(entry);
            Some(entry.clone())
        } else {
            None
        }
    }

    /// Remove a record by ID.
    pub fn remove(&self, id: &Uuid) -> Option<T> {
        self.data.write().remove(id)
    }

    /// Return the number of records.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone + Send + Sync> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

// -- Application Configuration ------------------------------------------------

/// Admin credentials the server authenticates against.
///
/// Custom `Debug` redacts the password to prevent credential leakage in logs.
#[derive(Clone)]
pub struct AdminCredentials {
    /// Admin username.
    pub username: String,
    /// Admin password.
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Credentials for the admin surface.
    pub admin: AdminCredentials,
}

impl AppConfig {
    /// Build configuration from the environment.
    ///
    /// - `PORT` (default 8080)
    /// - `ADMIN_USERNAME` (default `admin`)
    /// - `ADMIN_PASSWORD` (default `admin123` — a warning is logged when
    ///   the default is in use)
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let username =
            std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let password = match std::env::var("ADMIN_PASSWORD") {
            Ok(p) => p,
            Err(_) => {
                tracing::warn!(
                    "ADMIN_PASSWORD not set — falling back to the built-in default. \
                     Set it before exposing this server."
                );
                "admin123".to_string()
            }
        };

        Self {
            port,
            admin: AdminCredentials { username, password },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            admin: AdminCredentials {
                username: "admin".to_string(),
                password: "admin123".to_string(),
            },
        }
    }
}

// -- Application State --------------------------------------------------------

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly via `Arc` internals in each `Store` and in the outbound
/// HTTP clients.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Leads submitted through the public intake endpoint.
    pub quotes: Store<Quote>,
    /// Portfolio entries.
    pub projects: Store<Project>,

    /// PostgreSQL connection pool for durable persistence.
    /// When `Some`, quote and project mutations write through to Postgres
    /// and startup hydrates the in-memory stores. When `None`, the API
    /// operates in in-memory-only mode.
    pub db_pool: Option<PgPool>,

    /// Country-from-IP lookup client.
    pub geo: GeoClient,
    /// Telegram lead notifier, when configured.
    pub notifier: Option<TelegramNotifier>,

    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create a state with empty stores and the given collaborators.
    pub fn new(
        config: AppConfig,
        db_pool: Option<PgPool>,
        geo: GeoClient,
        notifier: Option<TelegramNotifier>,
    ) -> Self {
        Self {
            quotes: Store::new(),
            projects: Store::new(),
            db_pool,
            geo,
            notifier,
            config,
        }
    }

    /// Load all persisted quotes and projects into the in-memory stores.
    ///
    /// No-op when the server runs without a database.
    pub async fn hydrate_from_db(&self) -> Result<(), sqlx::Error> {
        let Some(pool) = &self.db_pool else {
            return Ok(());
        };

        let quotes = crate::db::quotes::list_all(pool).await?;
        let projects = crate::db::projects::list_all(pool).await?;
        for quote in quotes {
            self.quotes.insert(quote.id, quote);
        }
        for project in projects {
            self.projects.insert(project.id, project);
        }

        tracing::info!(
            quotes = self.quotes.len(),
            projects = self.projects.len(),
            "hydrated in-memory stores from database"
        );
        Ok(())
    }
}
