use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub affiliations: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Character {
    pub async fn create(
        db: &PgPool,
        name: &str,
        height: Option<&str>,
        weight: Option<&str>,
        affiliations: Option<&str>,
    ) -> Result<Character, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            r#"
            INSERT INTO characters (name, height, weight, affiliations)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, height, weight, affiliations, created_at
            "#,
        )
        .bind(name)
        .bind(height)
        .bind(weight)
        .bind(affiliations)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Character>, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            r#"
            SELECT id, name, height, weight, affiliations, created_at
            FROM characters
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_all(db: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        sqlx::query_as::<_, Character>(
            r#"
            SELECT id, name, height, weight, affiliations, created_at
            FROM characters
            ORDER BY id ASC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
