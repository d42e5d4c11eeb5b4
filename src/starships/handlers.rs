use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{require, ApiError},
    starships::repo::{NewStarship, Starship},
    state::AppState,
};

use super::dto::{CreateStarshipRequest, StarshipListResponse, StarshipResponse};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/starships", get(list_starships))
        .route("/starships/:id", get(get_starship))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/starship", post(create_starship))
}

#[instrument(skip(state))]
pub async fn list_starships(
    State(state): State<AppState>,
) -> Result<Json<StarshipListResponse>, ApiError> {
    let starships = Starship::list_all(&state.db).await?;
    Ok(Json(StarshipListResponse {
        msg: "Hello this is your GET /starships response".into(),
        starships,
    }))
}

#[instrument(skip(state))]
pub async fn get_starship(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<StarshipResponse>, ApiError> {
    let starship = Starship::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::starship_not_found(id))?;
    Ok(Json(StarshipResponse {
        msg: "Todo salio bien".into(),
        starship,
    }))
}

#[instrument(skip(state, body))]
pub async fn create_starship(
    State(state): State<AppState>,
    body: Option<Json<CreateStarshipRequest>>,
) -> Result<Json<StarshipResponse>, ApiError> {
    let Some(Json(payload)) = body else {
        return Err(ApiError::MissingBody);
    };
    let name = require(&payload.name, "name")?;

    let starship = Starship::create(
        &state.db,
        NewStarship {
            name,
            model: payload.model.as_deref(),
            dimensions: payload.dimensions.as_deref(),
            velocity: payload.velocity.as_deref(),
            hyperspace: payload.hyperspace,
            affiliations: payload.affiliations.as_deref(),
        },
    )
    .await?;
    info!(starship_id = starship.id, name = %starship.name, "starship registered");

    Ok(Json(StarshipResponse {
        msg: "Nave registrada".into(),
        starship,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyperspace_flag_deserializes_as_bool() {
        let payload: CreateStarshipRequest =
            serde_json::from_str(r#"{"name": "Falcon", "hyperspace": true}"#).unwrap();
        assert_eq!(payload.hyperspace, Some(true));
        assert!(require(&payload.name, "name").is_ok());
    }

    #[test]
    fn missing_name_yields_required_field_error() {
        let payload: CreateStarshipRequest =
            serde_json::from_str(r#"{"model": "YT-1300"}"#).unwrap();
        let err = require(&payload.name, "name").unwrap_err();
        assert_eq!(err.to_string(), "El campo name es obligatorio");
    }
}
