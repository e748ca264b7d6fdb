/// Class model
///
/// # Schema
///
/// ```sql
/// CREATE TABLE classes (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     subject VARCHAR(255) NOT NULL,
///     cost DOUBLE PRECISION NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// A subject offering tied to one tutor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Class {
    pub id: Uuid,

    /// Owning tutor (`users.id`)
    pub user_id: Uuid,

    /// Subject name, matched exactly by search
    pub subject: String,

    /// Price per lesson
    pub cost: f64,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a class
#[derive(Debug, Clone)]
pub struct CreateClass {
    pub user_id: Uuid,
    pub subject: String,
    pub cost: f64,
}

impl Class {
    /// Inserts a class for an existing tutor
    ///
    /// # Errors
    ///
    /// Fails with a foreign key violation if `user_id` does not exist.
    pub async fn create<'e, E>(executor: E, data: CreateClass) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let class = sqlx::query_as::<_, Class>(
            r#"
            INSERT INTO classes (user_id, subject, cost)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, subject, cost, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.subject)
        .bind(data.cost)
        .fetch_one(executor)
        .await?;

        Ok(class)
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let class = sqlx::query_as::<_, Class>(
            r#"
            SELECT id, user_id, subject, cost, created_at
            FROM classes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(class)
    }
}
