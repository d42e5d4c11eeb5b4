use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    error::{require, ApiError},
    state::AppState,
    users::repo::User,
};

use super::dto::{CreateUserRequest, UserListResponse, UserResponse};

pub fn read_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/user/:id", get(get_user))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/user", post(create_user))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, ApiError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(UserListResponse {
        msg: "Hello, this is your GET /users response".into(),
        users,
    }))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::user_not_found(id))?;
    Ok(Json(UserResponse {
        msg: "Todo salio bien".into(),
        user,
    }))
}

#[instrument(skip(state, body))]
pub async fn create_user(
    State(state): State<AppState>,
    body: Option<Json<CreateUserRequest>>,
) -> Result<Json<UserResponse>, ApiError> {
    let Some(Json(payload)) = body else {
        return Err(ApiError::MissingBody);
    };
    let email = require(&payload.email, "email")?;
    let password = require(&payload.password, "password")?;

    let user = User::create(&state.db, email, password).await?;
    info!(user_id = user.id, email = %user.email, "user registered");

    Ok(Json(UserResponse {
        msg: "Usuario registrado".into(),
        user,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::OffsetDateTime;

    #[test]
    fn serialized_user_excludes_password() {
        let user = User {
            id: 1,
            email: "a@b.com".into(),
            password: "x".into(),
            is_active: true,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["email"], "a@b.com");
        assert_eq!(value["is_active"], true);
        assert!(value.get("password").is_none());
    }

    #[test]
    fn user_serialization_is_idempotent() {
        let user = User {
            id: 1,
            email: "a@b.com".into(),
            password: "x".into(),
            is_active: true,
            created_at: OffsetDateTime::UNIX_EPOCH,
        };
        let first = serde_json::to_value(&user).unwrap();
        let second = serde_json::to_value(&user).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_body_deserializes_with_absent_fields() {
        let payload: CreateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(payload.email.is_none());
        assert!(payload.password.is_none());
        assert!(require(&payload.email, "email").is_err());
    }

    #[test]
    fn response_envelope_carries_msg() {
        let response = UserResponse {
            msg: "Usuario registrado".into(),
            user: User {
                id: 1,
                email: "a@b.com".into(),
                password: "x".into(),
                is_active: true,
                created_at: OffsetDateTime::UNIX_EPOCH,
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["msg"], "Usuario registrado");
        assert_eq!(value["user"]["email"], "a@b.com");
    }
}
