//! Quote persistence operations.
//!
//! All functions take a `&PgPool` and operate on the `quotes` table.
//! The status column stores the wire form of [`QuoteStatus`]; decoding
//! fails loudly on any value outside the closed set rather than silently
//! defaulting, which would corrupt lead state on restart.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use orbita_core::{Quote, QuoteStatus};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct QuoteRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    status: String,
    country: String,
    ip_address: String,
    user_agent: Option<String>,
    created_at: DateTime<Utc>,
}

impl QuoteRow {
    fn into_record(self) -> Result<Quote, sqlx::Error> {
        let status = QuoteStatus::from_str(&self.status)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Quote {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
            status,
            country: self.country,
            ip_address: self.ip_address,
            user_agent: self.user_agent,
            created_at: self.created_at,
        })
    }
}

/// Insert a new quote record.
pub async fn insert(pool: &PgPool, record: &Quote) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO quotes (id, name, email, phone, message, status, country,
         ip_address, user_agent, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
    )
    .bind(record.id)
    .bind(&record.name)
    .bind(&record.email)
    .bind(&record.phone)
    .bind(&record.message)
    .bind(record.status.as_str())
    .bind(&record.country)
    .bind(&record.ip_address)
    .bind(&record.user_agent)
    .bind(record.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update a quote's status.
pub async fn update_status(
    pool: &PgPool,
    id: Uuid,
    status: QuoteStatus,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE quotes SET status = $1 WHERE id = $2")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a quote by ID.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM quotes WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Fetch all quotes, newest first.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Quote>, sqlx::Error> {
    let rows = sqlx::query_as::<_, QuoteRow>(
        "SELECT id, name, email, phone, message, status, country, ip_address,
         user_agent, created_at
         FROM quotes ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(QuoteRow::into_record).collect()
}
