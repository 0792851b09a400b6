#![forbid(unsafe_code)]

use milkyway_adapter::{build_router, AdapterConfig, AppState, ROUTES};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info,milkyway_adapter=debug,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = AdapterConfig::from_env()?;
    let state = AppState::with_sample_data();
    let app = build_router(state, &config);

    info!(
        addr = %config.bind,
        cors_enabled = config.cors_enabled,
        "milkyway_adapter_http starting blockchain data API"
    );
    for (path, description) in ROUTES {
        info!("  GET {path} - {description}");
    }

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("milkyway_adapter_http stopped");
    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
