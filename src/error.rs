use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything a handler can fail with. All variants serialize to the
/// `{"msg": ...}` envelope the API speaks.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Debes enviar informacion en el body")]
    MissingBody,

    #[error("El campo {0} es obligatorio")]
    MissingRequiredField(&'static str),

    #[error("{entity} con id {id} no existe")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    pub fn user_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "El usuario",
            id,
        }
    }

    pub fn character_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "El personaje",
            id,
        }
    }

    pub fn planet_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "El planeta",
            id,
        }
    }

    pub fn starship_not_found(id: i64) -> Self {
        Self::NotFound {
            entity: "La starship",
            id,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::MissingBody | ApiError::MissingRequiredField(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Database(e) => {
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "msg": msg }))).into_response()
    }
}

/// Required-field presence check. Whitespace-only values count as missing.
pub fn require<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, ApiError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::MissingRequiredField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_matches_api_contract() {
        let err = ApiError::MissingRequiredField("name");
        assert_eq!(err.to_string(), "El campo name es obligatorio");
    }

    #[test]
    fn not_found_messages_per_entity() {
        assert_eq!(
            ApiError::user_not_found(999).to_string(),
            "El usuario con id 999 no existe"
        );
        assert_eq!(
            ApiError::character_not_found(4).to_string(),
            "El personaje con id 4 no existe"
        );
        assert_eq!(
            ApiError::planet_not_found(7).to_string(),
            "El planeta con id 7 no existe"
        );
        assert_eq!(
            ApiError::starship_not_found(2).to_string(),
            "La starship con id 2 no existe"
        );
    }

    #[test]
    fn status_codes_per_variant() {
        let res = ApiError::MissingBody.into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = ApiError::user_not_found(1).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let res = ApiError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn require_rejects_missing_and_blank() {
        assert!(require(&None, "name").is_err());
        assert!(require(&Some("   ".into()), "name").is_err());
        assert_eq!(require(&Some("Leia".into()), "name").unwrap(), "Leia");
    }
}
