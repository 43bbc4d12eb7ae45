use axum::extract::OriginalUri;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

use stockroom_config::CorsConfig;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::{AUTH_TOKEN_HEADER, require_auth};
use crate::middleware::role::require_admin;
use crate::modules::auth::router::{init_auth_router, init_session_router};
use crate::modules::users::router::init_users_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/", get(welcome))
        .route(
            "/api-docs/openapi.json",
            get({
                let openapi = openapi.clone();
                move || async move { Json(openapi) }
            }),
        )
        .merge(Scalar::with_url("/scalar", openapi))
        .nest(
            "/api/auth",
            Router::new()
                .merge(init_auth_router())
                .merge(
                    init_session_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth)),
                )
                .merge(
                    init_users_router()
                        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
                ),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(not_found)
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

async fn welcome() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to Inventory Management System API" }))
}

async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Cannot {} {}", method, uri.path()) })),
    )
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origin = if config.allows_any() {
        AllowOrigin::from(Any)
    } else {
        let allowed_origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        AllowOrigin::list(allowed_origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static(AUTH_TOKEN_HEADER),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
}
