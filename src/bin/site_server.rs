// Site server entry point
//
// Purpose: load the content document, bind it into the page template, and
// serve the result with Axum.
// Usage: cargo run --features api --bin site_server

use content_binder::{create_router, AppState, SiteConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "content_binder=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting site server...");

    let config = SiteConfig::from_env();

    tracing::info!("Configuration:");
    tracing::info!("  SITE_ROOT: {}", config.site_root.display());
    match &config.content_url {
        Some(url) => tracing::info!("  CONTENT_URL: {}", url),
        None => tracing::info!("  CONTENT_PATH: {}", config.content_path),
    }
    tracing::info!("  PAGE_TEMPLATE: {}", config.page_template);
    tracing::info!("  PORT: {}", config.port);

    // Reads the template and runs the first load
    let state = AppState::new(&config).await?;

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
