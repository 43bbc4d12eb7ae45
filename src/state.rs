use std::sync::Arc;

use anyhow::Context;
use sqlx::SqlitePool;

use stockroom_config::{AccountsConfig, AppConfig, CorsConfig, JwtConfig};
use stockroom_core::{AppError, hash_password};
use stockroom_db::{init_db_pool, run_migrations};

use crate::modules::users::service::UserService;

const DUMMY_PASSWORD: &str = "stockroom-dummy-password";

/// Shared, immutable application state. Cloned into every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: SqlitePool,
    pub jwt_config: JwtConfig,
    pub accounts_config: AccountsConfig,
    pub cors_config: CorsConfig,
    /// bcrypt hash at the configured cost, verified against when a login names
    /// an unknown account so both failure paths do the same work.
    pub login_dummy_hash: Arc<str>,
}

impl AppState {
    pub fn new(
        db: SqlitePool,
        jwt_config: JwtConfig,
        accounts_config: AccountsConfig,
        cors_config: CorsConfig,
    ) -> Result<Self, AppError> {
        let login_dummy_hash = hash_password(DUMMY_PASSWORD, accounts_config.bcrypt_cost)?;

        Ok(Self {
            db,
            jwt_config,
            accounts_config,
            cors_config,
            login_dummy_hash: login_dummy_hash.into(),
        })
    }
}

/// Connects to the database, applies migrations and seeds the default admin
/// when the store is empty.
pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let db = init_db_pool(&config.database)
        .await
        .with_context(|| format!("Failed to connect to database at {}", config.database.url))?;

    run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    UserService::seed_default_admin(&db, &config.accounts)
        .await
        .map_err(|e| e.error.context("Failed to seed default admin"))?;

    AppState::new(
        db,
        config.jwt.clone(),
        config.accounts.clone(),
        config.cors.clone(),
    )
    .map_err(|e| e.error.context("Failed to prepare login hash"))
}
