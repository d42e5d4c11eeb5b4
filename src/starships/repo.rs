use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Starship {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    pub dimensions: Option<String>,
    pub velocity: Option<String>,
    pub hyperspace: Option<bool>,
    pub affiliations: Option<String>,
    pub created_at: OffsetDateTime,
}

pub struct NewStarship<'a> {
    pub name: &'a str,
    pub model: Option<&'a str>,
    pub dimensions: Option<&'a str>,
    pub velocity: Option<&'a str>,
    pub hyperspace: Option<bool>,
    pub affiliations: Option<&'a str>,
}

impl Starship {
    pub async fn create(db: &PgPool, new: NewStarship<'_>) -> Result<Starship, sqlx::Error> {
        sqlx::query_as::<_, Starship>(
            r#"
            INSERT INTO starships (name, model, dimensions, velocity, hyperspace, affiliations)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, model, dimensions, velocity, hyperspace, affiliations, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.model)
        .bind(new.dimensions)
        .bind(new.velocity)
        .bind(new.hyperspace)
        .bind(new.affiliations)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Starship>, sqlx::Error> {
        sqlx::query_as::<_, Starship>(
            r#"
            SELECT id, name, model, dimensions, velocity, hyperspace, affiliations, created_at
            FROM starships
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_all(db: &PgPool) -> Result<Vec<Starship>, sqlx::Error> {
        sqlx::query_as::<_, Starship>(
            r#"
            SELECT id, name, model, dimensions, velocity, hyperspace, affiliations, created_at
            FROM starships
            ORDER BY id ASC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
