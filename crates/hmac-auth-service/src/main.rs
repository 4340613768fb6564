//! HMAC Auth Service - demonstration server for HMAC-protected routes
//!
//! Run with `HMAC_KEYS=deadbeef hmac-auth-service`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hmac_auth_service::{create_router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hmac_auth=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HMAC Auth Service");

    // Fail closed: never serve without keys.
    let config = ServiceConfig::from_env().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        keys = config.hmac_keys.len(),
        "Service configuration loaded"
    );

    let listen_addr = config.listen_addr.clone();
    let app = create_router(AppState::new(config));

    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
