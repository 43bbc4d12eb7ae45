use crate::{env_or, env_parse};

/// Account-related settings: the bcrypt work factor and the administrator
/// seeded into an empty store.
#[derive(Clone, Debug)]
pub struct AccountsConfig {
    pub bcrypt_cost: u32,
    pub default_admin_username: String,
    pub default_admin_password: String,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: 10,
            default_admin_username: "admin".to_string(),
            default_admin_password: "admin123".to_string(),
        }
    }
}

impl AccountsConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bcrypt_cost: env_parse("BCRYPT_COST", defaults.bcrypt_cost),
            default_admin_username: env_or(
                "DEFAULT_ADMIN_USERNAME",
                &defaults.default_admin_username,
            ),
            default_admin_password: env_or(
                "DEFAULT_ADMIN_PASSWORD",
                &defaults.default_admin_password,
            ),
        }
    }
}
