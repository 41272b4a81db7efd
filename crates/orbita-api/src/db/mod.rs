//! # Database Persistence
//!
//! Optional Postgres persistence behind the in-memory stores. When
//! `DATABASE_URL` is set, mutations write through and startup hydrates
//! the stores from the tables; when absent, the server runs in-memory
//! only and every function in the submodules goes unused.

pub mod projects;
pub mod quotes;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const CREATE_QUOTES: &str = "CREATE TABLE IF NOT EXISTS quotes (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    message TEXT NOT NULL,
    status TEXT NOT NULL,
    country TEXT NOT NULL,
    ip_address TEXT NOT NULL,
    user_agent TEXT,
    created_at TIMESTAMPTZ NOT NULL
)";

const CREATE_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    tech JSONB NOT NULL,
    image TEXT NOT NULL,
    link TEXT,
    created_at TIMESTAMPTZ NOT NULL
)";

/// Initialize the connection pool from `DATABASE_URL`.
///
/// Absent variable means in-memory-only mode, not an error. On
/// connection, the two tables are created if missing so a fresh database
/// works without an external migration step.
pub async fn init_pool() -> Result<Option<PgPool>, sqlx::Error> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        tracing::info!("DATABASE_URL not set — running with in-memory stores only");
        return Ok(None);
    };

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    sqlx::query(CREATE_QUOTES).execute(&pool).await?;
    sqlx::query(CREATE_PROJECTS).execute(&pool).await?;

    tracing::info!("connected to Postgres");
    Ok(Some(pool))
}
