use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    // Stored as provided; never serialized back out.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn create(db: &PgPool, email: &str, password: &str) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password, is_active)
            VALUES ($1, $2, TRUE)
            RETURNING id, email, password, is_active, created_at
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_all(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password, is_active, created_at
            FROM users
            ORDER BY id ASC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
