use serde::{Deserialize, Serialize};

use crate::users::repo::User;

/// Request body for POST /user. Fields are optional so that presence is
/// checked by the handler, not by the deserializer.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub msg: String,
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub msg: String,
    pub user: User,
}
