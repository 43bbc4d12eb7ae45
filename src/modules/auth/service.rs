use anyhow::{Context, anyhow};
use sqlx::SqlitePool;

use stockroom_auth::{Role, issue_token};
use stockroom_config::{AccountsConfig, JwtConfig};
use stockroom_core::{AppError, verify_password};

use super::model::{AuthResponse, INVALID_CREDENTIALS, LoginRequest};
use crate::modules::users::model::{CreateUserDto, User};
use crate::modules::users::service::UserService;

pub struct AuthService;

impl AuthService {
    pub async fn register_user(
        db: &SqlitePool,
        dto: CreateUserDto,
        jwt_config: &JwtConfig,
        accounts: &AccountsConfig,
    ) -> Result<AuthResponse, AppError> {
        if dto.role == Some(Role::Admin) {
            tracing::warn!(username = %dto.username, "Anonymous registration requested the admin role");
        }

        let user = UserService::create_user(db, dto, accounts.bcrypt_cost).await?;
        let token = Self::issue_for(&user, jwt_config)?;

        tracing::info!(user_id = user.id, role = %user.role, "User registered");

        Ok(AuthResponse {
            message: "User registered successfully".to_string(),
            token,
            user,
        })
    }

    pub async fn login_user(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
        dummy_hash: &str,
    ) -> Result<AuthResponse, AppError> {
        let Some(credentials) = UserService::find_credentials(db, &dto.username).await? else {
            // Unknown username: still pay for one bcrypt verify.
            if let Err(e) = verify_password(&dto.password, dummy_hash) {
                tracing::warn!(error = ?e.error, "Dummy hash verification failed");
            }
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        };

        if !verify_password(&dto.password, &credentials.password)? {
            return Err(AppError::unauthorized(anyhow!(INVALID_CREDENTIALS)));
        }

        let user = User::from(credentials);
        let token = Self::issue_for(&user, jwt_config)?;

        Ok(AuthResponse {
            message: "Login successful".to_string(),
            token,
            user,
        })
    }

    fn issue_for(user: &User, jwt_config: &JwtConfig) -> Result<String, AppError> {
        let token = issue_token(&user.identity(), jwt_config).context("Failed to issue token")?;
        Ok(token)
    }
}
