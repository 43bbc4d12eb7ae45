//! Role-based authorization.
//!
//! Admin routes are gated by the [`require_admin`] route layer. Handlers behind
//! it read the caller with the [`AuthUser`] extractor, which finds the identity
//! the layer stored in the request extensions.

use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use stockroom_core::AppError;

use crate::middleware::auth::{AuthUser, authenticate};
use crate::state::AppState;

pub const ADMIN_REQUIRED: &str = "Access denied, admin privilege required";

pub fn check_admin(auth_user: &AuthUser) -> Result<(), AppError> {
    if !auth_user.is_admin() {
        return Err(AppError::forbidden(anyhow!(ADMIN_REQUIRED)));
    }
    Ok(())
}

/// Middleware that authenticates the caller and then requires `role == admin`.
///
/// Authentication failures are identical to
/// [`crate::middleware::auth::require_auth`]; a valid non-admin token is 403.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::middleware::role::require_admin;
///
/// let admin_routes = Router::new()
///     .route("/users", get(get_users))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_user = authenticate(req.headers(), &state.jwt_config)?;
    check_admin(&auth_user)?;

    req.extensions_mut().insert(auth_user);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request as HttpRequest, StatusCode};
    use axum::routing::get;
    use axum::{Router, middleware::from_fn_with_state};
    use stockroom_auth::{Claims, Identity, Role, issue_token};
    use stockroom_config::{AccountsConfig, CorsConfig, JwtConfig};
    use stockroom_db::init_memory_pool;
    use tower::ServiceExt;

    fn auth_user(role: Role) -> AuthUser {
        let identity = Identity {
            id: 3,
            username: "dave".to_string(),
            role,
        };
        AuthUser(Claims::new(&identity, 0, 3600))
    }

    #[test]
    fn test_check_admin_allows_admin() {
        assert!(check_admin(&auth_user(Role::Admin)).is_ok());
    }

    #[test]
    fn test_check_admin_rejects_user() {
        let err = check_admin(&auth_user(Role::User)).unwrap_err();
        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert_eq!(err.error.to_string(), ADMIN_REQUIRED);
    }

    async fn caller_id(auth_user: AuthUser) -> String {
        auth_user.id().to_string()
    }

    async fn gated_router() -> (Router, JwtConfig) {
        let jwt_config = JwtConfig::new("role-secret");
        let accounts = AccountsConfig {
            bcrypt_cost: 4,
            ..AccountsConfig::default()
        };
        let db = init_memory_pool().await.unwrap();
        let state =
            AppState::new(db, jwt_config.clone(), accounts, CorsConfig::parse("*")).unwrap();

        let router = Router::new()
            .route("/whoami", get(caller_id))
            .route_layer(from_fn_with_state(state.clone(), require_admin))
            .with_state(state);
        (router, jwt_config)
    }

    async fn call(router: Router, token: &str) -> (StatusCode, String) {
        let request = HttpRequest::builder()
            .uri("/whoami")
            .header("x-auth-token", token)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_layer_hands_admin_identity_to_handler() {
        let (router, jwt_config) = gated_router().await;
        let token = issue_token(&auth_user(Role::Admin).identity(), &jwt_config).unwrap();

        let (status, body) = call(router, &token).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "3");
    }

    #[tokio::test]
    async fn test_layer_rejects_user_before_handler() {
        let (router, jwt_config) = gated_router().await;
        let token = issue_token(&auth_user(Role::User).identity(), &jwt_config).unwrap();

        let (status, body) = call(router, &token).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(body.contains(ADMIN_REQUIRED));
    }
}
