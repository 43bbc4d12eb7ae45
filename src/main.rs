use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use stockroom::logging::init_tracing;
use stockroom::router::init_router;
use stockroom::state::init_app_state;
use stockroom_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing().context("Failed to initialize tracing")?;

    let config = AppConfig::from_env();
    if config.jwt.uses_default_secret() {
        warn!("JWT_SECRET is not set; signing tokens with the built-in default secret");
    }

    let state = init_app_state(&config).await?;
    let app = init_router(state);

    let address = config.server.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("🚀 Server running on http://{}", address);
    info!("📖 Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
