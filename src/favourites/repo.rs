use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::characters::repo::Character;
use crate::planets::repo::Planet;
use crate::starships::repo::Starship;

/// One user favouriting one character. Explicit record rather than a bare
/// link table so later metadata can attach to the relation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavouriteCharacter {
    pub id: i64,
    pub user_id: i64,
    pub character_id: i64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavouritePlanet {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: i64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavouriteStarship {
    pub id: i64,
    pub user_id: i64,
    pub starship_id: i64,
    pub created_at: OffsetDateTime,
}

/// Resolves a user's favourited characters in the order the favourites were
/// recorded. Caller is responsible for checking the user exists first.
pub async fn characters_for_user(db: &PgPool, user_id: i64) -> Result<Vec<Character>, sqlx::Error> {
    sqlx::query_as::<_, Character>(
        r#"
        SELECT c.id, c.name, c.height, c.weight, c.affiliations, c.created_at
        FROM favourite_characters f
        JOIN characters c ON c.id = f.character_id
        WHERE f.user_id = $1
        ORDER BY f.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn planets_for_user(db: &PgPool, user_id: i64) -> Result<Vec<Planet>, sqlx::Error> {
    sqlx::query_as::<_, Planet>(
        r#"
        SELECT p.id, p.name, p.extension, p.population, p.locations, p.climate,
               p.species, p.affiliations, p.created_at
        FROM favourite_planets f
        JOIN planets p ON p.id = f.planet_id
        WHERE f.user_id = $1
        ORDER BY f.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn starships_for_user(db: &PgPool, user_id: i64) -> Result<Vec<Starship>, sqlx::Error> {
    sqlx::query_as::<_, Starship>(
        r#"
        SELECT s.id, s.name, s.model, s.dimensions, s.velocity, s.hyperspace,
               s.affiliations, s.created_at
        FROM favourite_starships f
        JOIN starships s ON s.id = f.starship_id
        WHERE f.user_id = $1
        ORDER BY f.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

// Write path is not routed yet; the HTTP surface exposes favourites
// read-only. Kept at the store level for the future favouriting endpoints.

#[allow(dead_code)]
pub async fn add_character(
    db: &PgPool,
    user_id: i64,
    character_id: i64,
) -> Result<FavouriteCharacter, sqlx::Error> {
    sqlx::query_as::<_, FavouriteCharacter>(
        r#"
        INSERT INTO favourite_characters (user_id, character_id)
        VALUES ($1, $2)
        RETURNING id, user_id, character_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(character_id)
    .fetch_one(db)
    .await
}

#[allow(dead_code)]
pub async fn add_planet(
    db: &PgPool,
    user_id: i64,
    planet_id: i64,
) -> Result<FavouritePlanet, sqlx::Error> {
    sqlx::query_as::<_, FavouritePlanet>(
        r#"
        INSERT INTO favourite_planets (user_id, planet_id)
        VALUES ($1, $2)
        RETURNING id, user_id, planet_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(planet_id)
    .fetch_one(db)
    .await
}

#[allow(dead_code)]
pub async fn add_starship(
    db: &PgPool,
    user_id: i64,
    starship_id: i64,
) -> Result<FavouriteStarship, sqlx::Error> {
    sqlx::query_as::<_, FavouriteStarship>(
        r#"
        INSERT INTO favourite_starships (user_id, starship_id)
        VALUES ($1, $2)
        RETURNING id, user_id, starship_id, created_at
        "#,
    )
    .bind(user_id)
    .bind(starship_id)
    .fetch_one(db)
    .await
}
