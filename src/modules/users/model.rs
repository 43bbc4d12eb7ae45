//! Account data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`]: the public view of an account, safe to serialize
//! - [`UserCredentials`]: an account row including its password hash
//!
//! # Request DTOs
//!
//! - [`CreateUserDto`]: registration and admin account creation

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use stockroom_auth::{Identity, Role};
use stockroom_core::serde::deserialize_null_as_empty;

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";
pub const USER_EXISTS: &str = "User already exists";
pub const USER_NOT_FOUND: &str = "User not found";

/// An account as returned by the API. The password hash never appears here.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
}

impl User {
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

/// An account row with its bcrypt hash, used only for login.
#[derive(FromRow, Debug, Clone)]
pub struct UserCredentials {
    pub id: i64,
    pub username: String,
    pub password: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
}

impl From<UserCredentials> for User {
    fn from(row: UserCredentials) -> Self {
        User {
            id: row.id,
            username: row.username,
            role: row.role,
        }
    }
}

/// Body of `POST /api/auth/register` and `POST /api/auth/users`.
///
/// Missing and `null` strings deserialize as empty so that both fall under the
/// same validation message.
#[derive(Deserialize, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
    /// Defaults to `user` when omitted or null.
    #[serde(default)]
    pub role: Option<Role>,
}

impl std::fmt::Debug for CreateUserDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserDto")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreatedUserResponse {
    pub message: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_without_password() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            role: Role::Admin,
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "username": "admin", "role": "admin" })
        );
    }

    #[test]
    fn test_create_user_dto_role_defaults_to_none() {
        let dto: CreateUserDto =
            serde_json::from_str(r#"{"username":"alice","password":"secret1"}"#).unwrap();
        assert_eq!(dto.role, None);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_user_dto_null_fields_fail_validation() {
        let dto: CreateUserDto =
            serde_json::from_str(r#"{"username":null,"password":"x","role":null}"#).unwrap();
        assert_eq!(dto.username, "");
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_user_dto_rejects_unknown_role() {
        let result = serde_json::from_str::<CreateUserDto>(
            r#"{"username":"a","password":"b","role":"root"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let dto: CreateUserDto =
            serde_json::from_str(r#"{"username":"alice","password":"secret1"}"#).unwrap();
        let printed = format!("{:?}", dto);
        assert!(!printed.contains("secret1"));
    }
}
