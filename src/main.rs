use anyhow::Context;
use dotenvy::dotenv;
use iceapple_admin::logging::init_tracing;
use iceapple_admin::router::init_router;
use iceapple_admin::state::init_app_state;
use iceapple_config::ServerConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _log_guard = init_tracing()?;

    let server_config = ServerConfig::from_env();
    let state = init_app_state();
    let app = init_router(state);

    let address = server_config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    info!(address = %address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
