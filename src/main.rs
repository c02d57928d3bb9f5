//! hello-probe entry point.
//!
//! Reads configuration from the environment, initializes tracing, builds the
//! Axum router, and serves it until SIGTERM/SIGINT.

use hello_probe::http::start_server;
use hello_probe::logging::init_tracing;
use hello_probe::{create_router, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = AppConfig::from_env()?;

    init_tracing(&config.logging)?;

    if let Some(notice) = config.http.default_port_notice() {
        tracing::info!("{}", notice);
    }

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        log_format = %config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();

    if let Err(e) = start_server(app, &config.http).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
