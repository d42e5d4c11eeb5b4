use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    characters::repo::Character,
    error::{require, ApiError},
    state::AppState,
};

use super::dto::{CharacterListResponse, CharacterResponse, CreateCharacterRequest};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/characters", get(list_characters))
        .route("/characters/:id", get(get_character))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/character", post(create_character))
}

#[instrument(skip(state))]
pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<CharacterListResponse>, ApiError> {
    let characters = Character::list_all(&state.db).await?;
    Ok(Json(CharacterListResponse {
        msg: "Hello this is your GET /characters response".into(),
        characters,
    }))
}

#[instrument(skip(state))]
pub async fn get_character(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let character = Character::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::character_not_found(id))?;
    Ok(Json(CharacterResponse {
        msg: "Todo salio bien".into(),
        character,
    }))
}

#[instrument(skip(state, body))]
pub async fn create_character(
    State(state): State<AppState>,
    body: Option<Json<CreateCharacterRequest>>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let Some(Json(payload)) = body else {
        return Err(ApiError::MissingBody);
    };
    let name = require(&payload.name, "name")?;

    let character = Character::create(
        &state.db,
        name,
        payload.height.as_deref(),
        payload.weight.as_deref(),
        payload.affiliations.as_deref(),
    )
    .await?;
    info!(character_id = character.id, name = %character.name, "character registered");

    Ok(Json(CharacterResponse {
        msg: "Personaje registrado".into(),
        character,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_fails_name_requirement() {
        let payload: CreateCharacterRequest = serde_json::from_str("{}").unwrap();
        let err = require(&payload.name, "name").unwrap_err();
        assert_eq!(err.to_string(), "El campo name es obligatorio");
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let payload: CreateCharacterRequest =
            serde_json::from_str(r#"{"name": "Chewbacca"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Chewbacca"));
        assert!(payload.height.is_none());
        assert!(payload.weight.is_none());
        assert!(payload.affiliations.is_none());
    }
}
