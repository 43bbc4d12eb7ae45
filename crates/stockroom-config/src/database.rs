use crate::{env_or, env_parse};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            url: env_or("DATABASE_URL", "sqlite://database.sqlite"),
            max_connections: env_parse("DATABASE_MAX_CONNECTIONS", 5),
        }
    }
}
