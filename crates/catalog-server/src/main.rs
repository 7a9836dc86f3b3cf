//! # Catalog Server
//!
//! Main entry point for the Catalog API.

use catalog_config::{AppConfig, ConfigLoader};
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::DatabasePoolInterface;
use catalog_rest::create_router;
use catalog_server::{
    di::AppContainer,
    startup::{print_banner, print_startup_info},
    telemetry::init_logging,
};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("Failed to initialize logging: {e}");
    }

    print_banner();
    info!("Starting Catalog API...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> CatalogResult<()> {
    let container = AppContainer::build(&config).await?;
    let router = create_router(
        container.app_state(&config.security.api_token),
        &config.server,
    );

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::Internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&addr, container.cache.backend());

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CatalogError::Internal(format!("REST server error: {e}")))?;

    container.db_pool.close().await;
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
