//! sse-relay server entry point.
//!
//! Starts the Axum HTTP server with the event-stream and broadcast
//! endpoints.

use tracing_subscriber::EnvFilter;

use sse_relay::api;
use sse_relay::app_state::AppState;
use sse_relay::config::{LogFormat, RelayConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration first: it selects the log format
    let config = RelayConfig::from_env()?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(
        addr = %config.listen_addr,
        max_broadcast_bytes = config.max_broadcast_bytes,
        "starting sse-relay"
    );

    // Registry, broadcaster and route table live for the whole process
    let app_state = AppState::new(config.max_broadcast_bytes);
    let app = api::app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
