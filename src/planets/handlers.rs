use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{require, ApiError},
    planets::repo::{NewPlanet, Planet},
    state::AppState,
};

use super::dto::{CreatePlanetRequest, PlanetListResponse, PlanetResponse};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets))
        .route("/planets/:id", get(get_planet))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/planet", post(create_planet))
}

#[instrument(skip(state))]
pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<PlanetListResponse>, ApiError> {
    let planets = Planet::list_all(&state.db).await?;
    Ok(Json(PlanetListResponse {
        msg: "Hello this is your GET /planets response".into(),
        planets,
    }))
}

#[instrument(skip(state))]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let planet = Planet::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::planet_not_found(id))?;
    Ok(Json(PlanetResponse {
        msg: "Todo salio bien".into(),
        planet,
    }))
}

#[instrument(skip(state, body))]
pub async fn create_planet(
    State(state): State<AppState>,
    body: Option<Json<CreatePlanetRequest>>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let Some(Json(payload)) = body else {
        return Err(ApiError::MissingBody);
    };
    let name = require(&payload.name, "name")?;

    let planet = Planet::create(
        &state.db,
        NewPlanet {
            name,
            extension: payload.extension.as_deref(),
            population: payload.population.as_deref(),
            locations: payload.locations.as_deref(),
            climate: payload.climate.as_deref(),
            species: payload.species.as_deref(),
            affiliations: payload.affiliations.as_deref(),
        },
    )
    .await?;
    info!(planet_id = planet.id, name = %planet.name, "planet registered");

    Ok(Json(PlanetResponse {
        msg: "Planeta registrado".into(),
        planet,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_the_only_required_field() {
        let payload: CreatePlanetRequest =
            serde_json::from_str(r#"{"name": "Tatooine", "climate": "arid"}"#).unwrap();
        assert!(require(&payload.name, "name").is_ok());
        assert!(payload.extension.is_none());
        assert_eq!(payload.climate.as_deref(), Some("arid"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let payload: CreatePlanetRequest = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert!(require(&payload.name, "name").is_err());
    }
}
