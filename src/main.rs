use anyhow::Result;
use tracing::info;

use trusttech_site::config::Config;
use trusttech_site::server::{build_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trusttech_site=info".parse()?),
        )
        .init();

    info!("Starting site server");

    // Load configuration from environment
    let config = Config::from_env()?;
    let port = config.port;

    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Listening on port {}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
