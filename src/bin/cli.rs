use anyhow::Context;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password, Select};
use dotenvy::dotenv;

use stockroom::cli::{create_user, list_users};
use stockroom_auth::Role;
use stockroom_config::{AccountsConfig, DatabaseConfig};
use stockroom_db::{init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "stockroom-cli")]
#[command(about = "Stockroom CLI - Administrative tools for the Stockroom API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account directly in the database
    CreateUser {
        /// Username for the new account
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Role: user or admin (will be prompted if not provided)
        #[arg(short = 'r', long)]
        role: Option<Role>,
    },
    /// List every account
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let database = DatabaseConfig::from_env();
    let pool = init_db_pool(&database)
        .await
        .with_context(|| format!("Failed to connect to database at {}", database.url))?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    match cli.command {
        Commands::CreateUser {
            username,
            password,
            role,
        } => handle_create_user(&pool, username, password, role).await,
        Commands::ListUsers => handle_list_users(&pool).await,
    }
}

async fn handle_create_user(
    pool: &stockroom_db::SqlitePool,
    username: Option<String>,
    password: Option<String>,
    role: Option<Role>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .context("Failed to read password")?,
    };

    let role = match role {
        Some(role) => role,
        None => {
            let roles = [Role::User, Role::Admin];
            let selection = Select::new()
                .with_prompt("Role")
                .items(&roles)
                .default(0)
                .interact()
                .context("Failed to read role")?;
            roles[selection]
        }
    };

    let accounts = AccountsConfig::from_env();

    match create_user(pool, &username, &password, role, &accounts).await {
        Ok(user) => {
            println!("\n✅ User created successfully!");
            println!("   ID: {}", user.id);
            println!("   Username: {}", user.username);
            println!("   Role: {}", user.role);
            Ok(())
        }
        Err(e) => {
            eprintln!("\n❌ Error creating user: {:#}", e.error);
            std::process::exit(1);
        }
    }
}

async fn handle_list_users(pool: &stockroom_db::SqlitePool) -> anyhow::Result<()> {
    let users = list_users(pool).await.map_err(|e| e.error)?;

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!("{:<6} {:<24} {}", "ID", "USERNAME", "ROLE");
    for user in users {
        println!("{:<6} {:<24} {}", user.id, user.username, user.role);
    }

    Ok(())
}
