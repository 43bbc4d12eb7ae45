//! # Stockroom Config
//!
//! Configuration types for the Stockroom API.
//!
//! Each structure is loaded from environment variables with a sensible
//! default, and is a plain value so tests can build one directly:
//!
//! - [`server`]: bind address
//! - [`database`]: SQLite connection settings
//! - [`jwt`]: token signing secret and lifetime
//! - [`accounts`]: bcrypt cost and the seeded administrator
//! - [`cors`]: allowed origins
//!
//! # Example
//!
//! ```ignore
//! use stockroom_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env();
//! println!("listening on {}", config.server.address());
//! ```

pub mod accounts;
pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

pub use accounts::AccountsConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;

use std::env;
use std::str::FromStr;

/// Every configuration section, loaded together at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub accounts: AccountsConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            accounts: AccountsConfig::from_env(),
            cors: CorsConfig::from_env(),
        }
    }
}

/// Reads `key` and parses it, falling back to `default` when unset or invalid.
pub(crate) fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
