use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    error::ApiError,
    favourites::repo,
    state::AppState,
    users::repo::User,
};

use super::dto::{
    FavouriteCharactersResponse, FavouritePlanetsResponse, FavouriteStarshipsResponse,
};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/user_fav_char/:id", get(get_favourite_characters))
        .route("/user_fav_plan/:id", get(get_favourite_planets))
        .route("/user_fav_star/:id", get(get_favourite_starships))
}

#[instrument(skip(state))]
pub async fn get_favourite_characters(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<FavouriteCharactersResponse>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::user_not_found(user_id))?;
    let favourite_characters = repo::characters_for_user(&state.db, user_id).await?;

    Ok(Json(FavouriteCharactersResponse {
        msg: "Todo salio bien".into(),
        favourite_characters,
        user,
    }))
}

#[instrument(skip(state))]
pub async fn get_favourite_planets(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<FavouritePlanetsResponse>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::user_not_found(user_id))?;
    let favourite_planets = repo::planets_for_user(&state.db, user_id).await?;

    Ok(Json(FavouritePlanetsResponse {
        msg: "Todo salio bien".into(),
        favourite_planets,
        user,
    }))
}

#[instrument(skip(state))]
pub async fn get_favourite_starships(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<FavouriteStarshipsResponse>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::user_not_found(user_id))?;
    let favourite_starships = repo::starships_for_user(&state.db, user_id).await?;

    Ok(Json(FavouriteStarshipsResponse {
        msg: "Todo salio bien".into(),
        favourite_starships,
        user,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn empty_favourites_serialize_as_empty_list() {
        let response = FavouriteCharactersResponse {
            msg: "Todo salio bien".into(),
            favourite_characters: vec![],
            user: User {
                id: 1,
                email: "a@b.com".into(),
                password: "x".into(),
                is_active: true,
                created_at: OffsetDateTime::UNIX_EPOCH,
            },
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["msg"], "Todo salio bien");
        assert!(value["favourite_characters"].as_array().unwrap().is_empty());
        assert!(value["user"].get("password").is_none());
    }

    #[test]
    fn nonexistent_user_maps_to_404_message() {
        let err = ApiError::user_not_found(999);
        assert_eq!(err.to_string(), "El usuario con id 999 no existe");
    }
}
