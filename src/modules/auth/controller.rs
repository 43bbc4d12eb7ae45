use anyhow::anyhow;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;
use utoipa::ToSchema;

use stockroom_core::AppError;

use super::model::{AuthResponse, LoginRequest};
use super::service::AuthService;
use crate::middleware::auth::AuthUser;
use crate::modules::users::model::{CreateUserDto, USER_NOT_FOUND, UserResponse};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Register a new account and receive a token
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Missing fields or user already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(username = %dto.username))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response =
        AuthService::register_user(&state.db, dto, &state.jwt_config, &state.accounts_config)
            .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login and receive a token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto), fields(username = %dto.username))]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let response =
        AuthService::login_user(&state.db, dto, &state.jwt_config, &state.login_dummy_hash)
            .await?;
    Ok(Json(response))
}

/// Current account, re-read from the store
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The authenticated account", body = UserResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("auth_token" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<UserResponse>, AppError> {
    let user = UserService::find_user(&state.db, auth_user.id())
        .await?
        .ok_or_else(|| AppError::not_found(anyhow!(USER_NOT_FOUND)))?;

    Ok(Json(UserResponse { user }))
}
