use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    pub extension: Option<String>,
    pub population: Option<String>,
    pub locations: Option<String>,
    pub climate: Option<String>,
    pub species: Option<String>,
    pub affiliations: Option<String>,
    pub created_at: OffsetDateTime,
}

pub struct NewPlanet<'a> {
    pub name: &'a str,
    pub extension: Option<&'a str>,
    pub population: Option<&'a str>,
    pub locations: Option<&'a str>,
    pub climate: Option<&'a str>,
    pub species: Option<&'a str>,
    pub affiliations: Option<&'a str>,
}

impl Planet {
    pub async fn create(db: &PgPool, new: NewPlanet<'_>) -> Result<Planet, sqlx::Error> {
        sqlx::query_as::<_, Planet>(
            r#"
            INSERT INTO planets (name, extension, population, locations, climate, species, affiliations)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, extension, population, locations, climate, species, affiliations, created_at
            "#,
        )
        .bind(new.name)
        .bind(new.extension)
        .bind(new.population)
        .bind(new.locations)
        .bind(new.climate)
        .bind(new.species)
        .bind(new.affiliations)
        .fetch_one(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i64) -> Result<Option<Planet>, sqlx::Error> {
        sqlx::query_as::<_, Planet>(
            r#"
            SELECT id, name, extension, population, locations, climate, species, affiliations, created_at
            FROM planets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_all(db: &PgPool) -> Result<Vec<Planet>, sqlx::Error> {
        sqlx::query_as::<_, Planet>(
            r#"
            SELECT id, name, extension, population, locations, climate, species, affiliations, created_at
            FROM planets
            ORDER BY id ASC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
