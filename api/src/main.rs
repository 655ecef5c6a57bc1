use actix_web::HttpServer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hse_api::{config, create_app, AppState};
use hse_shared::config::LogFormat;
use hse_shared::LoggingConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv = dotenvy::dotenv();

    let config = config::load()?;
    init_tracing(&config.logging)?;

    if let Err(e) = &dotenv {
        if !e.not_found() {
            warn!("Failed to read .env file: {}", e);
        }
    }

    config.validate().map_err(anyhow::Error::msg)?;

    info!(environment = %config.environment, "Starting HSE API server");

    let state = AppState::from_config(&config)?;
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;
    Ok(())
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(logging.source_location)
        .with_line_number(logging.source_location);

    let installed = match logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
