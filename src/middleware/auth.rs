use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};

use stockroom_auth::{Claims, Identity, Role, verify_token};
use stockroom_config::JwtConfig;
use stockroom_core::AppError;

use crate::state::AppState;

/// Header carrying the raw token, with no scheme prefix.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

pub const NO_TOKEN: &str = "No token, authorization denied";
pub const INVALID_TOKEN: &str = "Token is not valid";

/// The verified identity of the caller.
///
/// Inserted into request extensions by [`require_auth`] and
/// [`crate::middleware::role::require_admin`]. As an extractor it reuses that
/// value, or authenticates from the headers when no middleware ran.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn id(&self) -> i64 {
        self.0.id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn is_admin(&self) -> bool {
        self.0.is_admin()
    }

    pub fn identity(&self) -> Identity {
        self.0.identity()
    }
}

/// Reads and verifies the `x-auth-token` header.
///
/// Every verification failure is reported with the same message; the reason is
/// only logged.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<AuthUser, AppError> {
    let value = headers
        .get(AUTH_TOKEN_HEADER)
        .ok_or_else(|| AppError::unauthorized(anyhow!(NO_TOKEN)))?;

    if value.is_empty() {
        return Err(AppError::unauthorized(anyhow!(NO_TOKEN)));
    }

    let token = value
        .to_str()
        .map_err(|_| AppError::unauthorized(anyhow!(INVALID_TOKEN)))?;

    let claims = verify_token(token, jwt_config).map_err(|err| {
        tracing::debug!(reason = %err, "Rejected auth token");
        AppError::unauthorized(anyhow!(INVALID_TOKEN))
    })?;

    Ok(AuthUser(claims))
}

/// Middleware that requires a valid token on every route it wraps.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;
    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        authenticate(&parts.headers, &state.jwt_config)
    }
}
