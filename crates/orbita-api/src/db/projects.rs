//! Project persistence operations.
//!
//! All functions take a `&PgPool` and operate on the `projects` table.
//! The tech column stores the sequence as JSONB, preserving display
//! order; decoding fails loudly on malformed data rather than silently
//! dropping entries.

use chrono::{DateTime, Utc};
use orbita_core::{Project, TechList};
use sqlx::PgPool;
use uuid::Uuid;

fn tech_to_json(tech: &TechList) -> Result<serde_json::Value, sqlx::Error> {
    serde_json::to_value(tech).map_err(|e| {
        tracing::error!(error = %e, "failed to serialize project tech list");
        sqlx::Error::Encode(Box::new(e))
    })
}

#[derive(sqlx::FromRow)]
struct ProjectRow {
    id: Uuid,
    title: String,
    description: String,
    tech: serde_json::Value,
    image: String,
    link: Option<String>,
    created_at: DateTime<Utc>,
}

impl ProjectRow {
    fn into_record(self) -> Result<Project, sqlx::Error> {
        let tech: TechList =
            serde_json::from_value(self.tech).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Project {
            id: self.id,
            title: self.title,
            description: self.description,
            tech,
            image: self.image,
            link: self.link,
            created_at: self.created_at,
        })
    }
}

/// Insert a new project record.
pub async fn insert(pool: &PgPool, record: &Project) -> Result<(), sqlx::Error> {
    let tech = tech_to_json(&record.tech)?;

    sqlx::query(
        "INSERT INTO projects (id, title, description, tech, image, link, created_at)
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(record.id)
    .bind(&record.title)
    .bind(&record.description)
    .bind(&tech)
    .bind(&record.image)
    .bind(&record.link)
    .bind(record.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Replace a project's editable fields.
pub async fn update(pool: &PgPool, record: &Project) -> Result<bool, sqlx::Error> {
    let tech = tech_to_json(&record.tech)?;

    let result = sqlx::query(
        "UPDATE projects SET title = $1, description = $2, tech = $3, image = $4,
         link = $5 WHERE id = $6",
    )
    .bind(&record.title)
    .bind(&record.description)
    .bind(&tech)
    .bind(&record.image)
    .bind(&record.link)
    .bind(record.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a project by ID.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Fetch all projects, newest first.
pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ProjectRow>(
        "SELECT id, title, description, tech, image, link, created_at
         FROM projects ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(ProjectRow::into_record).collect()
}
