//! Todo Server
//!
//! Serves the todo HTTP API from a single in-memory store.
//!
//! # Usage
//!
//! ```bash
//! PORT=5000 cargo run --bin server
//! ```

use todo_server::{Config, build_app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        bind = %config.bind_address(),
        origins = ?config.server.cors_allowed_origins,
        "Configuration loaded"
    );

    let app = build_app(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!(addr = %listener.local_addr()?, "Todo server listening");

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down gracefully...");
    let _ = shutdown_tx.send(());

    match tokio::time::timeout(config.shutdown_timeout(), server).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!(
            timeout_secs = config.server.shutdown_timeout,
            "In-flight requests did not drain in time"
        ),
    }

    tracing::info!("Todo server stopped");
    Ok(())
}
