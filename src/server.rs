//! Demo server runtime.
//!
//! Wires configuration, logging and the REST router together. The library
//! itself does not need any of this; it exists so the pagination extractor
//! can be exercised against a real listener.

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::infrastructure::InMemoryCatalog;
use crate::interfaces::http::{create_api_router, AppState};

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level; `logging.format = "json"`
/// switches to structured output.
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

/// Serve the REST API until Ctrl+C.
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = InMemoryCatalog::generated(config.server.demo_items);
    let state = AppState::new(config.pagination.clone(), catalog);
    let router = create_api_router(state);

    let addr = config.server.address();
    let listener = TcpListener::bind(&addr).await?;
    info!("REST API listening on http://{}", addr);
    info!(
        page_param = %config.pagination.page_param,
        limit_param = %config.pagination.limit_param,
        max_limit = config.pagination.max_limit,
        "Pagination policy"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
