use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use stockroom_core::serde::deserialize_null_as_empty;

use crate::modules::users::model::User;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Returned by registration and login.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
