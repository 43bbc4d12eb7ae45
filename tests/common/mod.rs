#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use stockroom::modules::users::service::UserService;
use stockroom::router::init_router;
use stockroom::state::AppState;
use stockroom_config::{AccountsConfig, CorsConfig, JwtConfig};
use stockroom_db::init_memory_pool;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_SECRET)
}

pub fn test_accounts_config() -> AccountsConfig {
    AccountsConfig {
        bcrypt_cost: 4,
        ..AccountsConfig::default()
    }
}

pub struct TestApp {
    pub router: Router,
    pub db: SqlitePool,
}

/// A fresh in-memory store with migrations applied and the default admin
/// seeded, behind the full router.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_cors(CorsConfig::parse("*")).await
}

pub async fn setup_test_app_with_cors(cors_config: CorsConfig) -> TestApp {
    let db = init_memory_pool().await.unwrap();
    UserService::seed_default_admin(&db, &test_accounts_config())
        .await
        .unwrap();

    let state = AppState::new(
        db.clone(),
        test_jwt_config(),
        test_accounts_config(),
        cors_config,
    )
    .unwrap();

    TestApp {
        router: init_router(state),
        db,
    }
}

impl TestApp {
    /// Sends a request as-is and returns the raw response, headers included.
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("x-auth-token", token);
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        read_json(response).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Logs in and returns the issued token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/api/auth/login",
                None,
                serde_json::json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await
    }

    /// Registers an account and returns `(id, token)`.
    pub async fn register(&self, username: &str, password: &str) -> (i64, String) {
        let (status, body) = self
            .post(
                "/api/auth/register",
                None,
                serde_json::json!({ "username": username, "password": password }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        (
            body["user"]["id"].as_i64().unwrap(),
            body["token"].as_str().unwrap().to_string(),
        )
    }

    pub async fn count_users(&self) -> i64 {
        UserService::count_users(&self.db).await.unwrap()
    }
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
