//! Administrative operations behind the `stockroom-cli` binary.
//!
//! These bypass the HTTP layer and write to the store directly, so an operator
//! can create an administrator even when no one can log in.

use anyhow::anyhow;
use sqlx::SqlitePool;

use stockroom_auth::Role;
use stockroom_config::AccountsConfig;
use stockroom_core::AppError;

use crate::modules::users::model::{CreateUserDto, User};
use crate::modules::users::service::UserService;

pub async fn create_user(
    db: &SqlitePool,
    username: &str,
    password: &str,
    role: Role,
    accounts: &AccountsConfig,
) -> Result<User, AppError> {
    if username.is_empty() || password.is_empty() {
        return Err(AppError::bad_request(anyhow!(
            "Username and password are required"
        )));
    }

    let dto = CreateUserDto {
        username: username.to_string(),
        password: password.to_string(),
        role: Some(role),
    };

    UserService::create_user(db, dto, accounts.bcrypt_cost).await
}

pub async fn list_users(db: &SqlitePool) -> Result<Vec<User>, AppError> {
    UserService::get_users(db).await
}
