use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{get_me, login_user, register_user};
use crate::state::AppState;

/// Public routes: no token required.
pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login_user))
}

/// Routes for any authenticated account. Mounted behind `require_auth`.
pub fn init_session_router() -> Router<AppState> {
    Router::new().route("/me", get(get_me))
}
