use anyhow::anyhow;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use tracing::instrument;

use stockroom_core::AppError;

use super::model::{CreateUserDto, CreatedUserResponse, USER_NOT_FOUND, UsersResponse};
use super::service::UserService;
use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

pub const CANNOT_DELETE_SELF: &str = "Cannot delete your own account";

/// List every account (admin only)
#[utoipa::path(
    get,
    path = "/api/auth/users",
    responses(
        (status = 200, description = "All accounts ordered by id", body = UsersResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("auth_token" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Json<UsersResponse>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(UsersResponse { users }))
}

/// Create an account (admin only)
#[utoipa::path(
    post,
    path = "/api/auth/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created successfully", body = CreatedUserResponse),
        (status = 400, description = "Missing fields or user already exists", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("auth_token" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto), fields(username = %dto.username))]
pub async fn create_user(
    State(state): State<AppState>,
    admin: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<CreatedUserResponse>), AppError> {
    let user = UserService::create_user(&state.db, dto, state.accounts_config.bcrypt_cost).await?;

    tracing::info!(admin_id = admin.id(), user_id = user.id, role = %user.role, "User created by admin");

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserResponse {
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

/// Delete an account (admin only)
///
/// An admin cannot delete their own account. A non-numeric id matches no
/// account.
#[utoipa::path(
    delete,
    path = "/api/auth/users/{id}",
    params(("id" = String, Path, description = "Account id")),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 400, description = "Attempt to delete own account", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("auth_token" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    admin: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let Ok(id) = id.trim().parse::<i64>() else {
        return Err(AppError::not_found(anyhow!(USER_NOT_FOUND)));
    };

    if id == admin.id() {
        return Err(AppError::bad_request(anyhow!(CANNOT_DELETE_SELF)));
    }

    if UserService::delete_user(&state.db, id).await? == 0 {
        return Err(AppError::not_found(anyhow!(USER_NOT_FOUND)));
    }

    tracing::info!(admin_id = admin.id(), user_id = id, "User deleted");

    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
