use crate::env_or;

/// Fallback signing secret used when `JWT_SECRET` is not set.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";

/// Lifetime of an issued token in seconds (1 hour).
pub const TOKEN_EXPIRY_SECS: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self::new(env_or("JWT_SECRET", DEFAULT_JWT_SECRET))
    }

    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: TOKEN_EXPIRY_SECS,
        }
    }

    /// True when the process is signing with the built-in fallback secret.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}
