use anyhow::{Context, anyhow};
use sqlx::SqlitePool;

use stockroom_auth::Role;
use stockroom_config::AccountsConfig;
use stockroom_core::{AppError, hash_password};

use crate::modules::users::model::{CreateUserDto, USER_EXISTS, User, UserCredentials};

pub struct UserService;

impl UserService {
    /// Hashes the password and inserts a new account.
    ///
    /// The username lookup is a fast path; the UNIQUE constraint decides races,
    /// and a violation on insert is reported as the same conflict.
    pub async fn create_user(
        db: &SqlitePool,
        dto: CreateUserDto,
        bcrypt_cost: u32,
    ) -> Result<User, AppError> {
        if Self::username_exists(db, &dto.username).await? {
            return Err(AppError::bad_request(anyhow!(USER_EXISTS)));
        }

        let role = dto.role.unwrap_or_default();
        let password_hash = hash_password(&dto.password, bcrypt_cost)?;

        Self::insert_user(db, &dto.username, &password_hash, role).await
    }

    pub async fn insert_user(
        db: &SqlitePool,
        username: &str,
        password_hash: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password, role)
            VALUES (?, ?, ?)
            RETURNING id, username, role
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(db)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::bad_request(anyhow!(USER_EXISTS)))
            }
            Err(e) => Err(AppError::internal(
                anyhow::Error::new(e).context("Failed to insert user"),
            )),
        }
    }

    pub async fn username_exists(db: &SqlitePool, username: &str) -> Result<bool, AppError> {
        let matches: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(db)
            .await
            .context("Failed to check username")?;

        Ok(matches > 0)
    }

    pub async fn find_credentials(
        db: &SqlitePool,
        username: &str,
    ) -> Result<Option<UserCredentials>, AppError> {
        let row = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, password, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user credentials")?;

        Ok(row)
    }

    pub async fn find_user(db: &SqlitePool, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username, role FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user")?;

        Ok(user)
    }

    pub async fn get_users(db: &SqlitePool) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, role FROM users ORDER BY id")
            .fetch_all(db)
            .await
            .context("Failed to fetch users")?;

        Ok(users)
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete_user(db: &SqlitePool, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete user")?;

        Ok(result.rows_affected())
    }

    pub async fn count_users(db: &SqlitePool) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db)
            .await
            .context("Failed to count users")?;

        Ok(count)
    }

    /// Creates the configured administrator when the store has no accounts.
    ///
    /// Returns the new account, or `None` if accounts already existed.
    pub async fn seed_default_admin(
        db: &SqlitePool,
        accounts: &AccountsConfig,
    ) -> Result<Option<User>, AppError> {
        if Self::count_users(db).await? > 0 {
            return Ok(None);
        }

        let password_hash = hash_password(&accounts.default_admin_password, accounts.bcrypt_cost)?;
        let admin = Self::insert_user(
            db,
            &accounts.default_admin_username,
            &password_hash,
            Role::Admin,
        )
        .await?;

        tracing::info!(user_id = admin.id, username = %admin.username, "Default admin user created");

        Ok(Some(admin))
    }
}
