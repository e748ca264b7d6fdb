/// Tutor model
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     avatar VARCHAR(1024) NOT NULL,
///     whatsapp VARCHAR(32) NOT NULL,
///     bio TEXT NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// A tutor profile
///
/// Created once per class registration and never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Store-generated id
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Avatar image URL
    pub avatar: String,

    /// WhatsApp phone number students use to get in touch
    pub whatsapp: String,

    /// Free-form biography
    pub bio: String,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a tutor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub avatar: String,
    pub whatsapp: String,
    pub bio: String,
}

impl User {
    /// Inserts a tutor and returns the stored row
    pub async fn create<'e, E>(executor: E, data: CreateUser) -> Result<Self, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, avatar, whatsapp, bio)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, avatar, whatsapp, bio, created_at
            "#,
        )
        .bind(data.name)
        .bind(data.avatar)
        .bind(data.whatsapp)
        .bind(data.bio)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Finds a tutor by id
    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> Result<Option<Self>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, avatar, whatsapp, bio, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_deserializes_from_form_fields() {
        let data: CreateUser = serde_json::from_str(
            r#"{"name":"Ana","avatar":"u","whatsapp":"1","bio":"b"}"#,
        )
        .unwrap();

        assert_eq!(data.name, "Ana");
        assert_eq!(data.whatsapp, "1");
    }
}
