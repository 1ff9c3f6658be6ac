use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use menu_api::{
    config::{AppConfig, Environment},
    database::{DatabaseManager, MongoMenuRepository},
    router,
    services::MenuService,
    AppState,
};

/// How long in-flight requests get to finish after a shutdown signal
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();
    let dotenv = environment.loads_dotenv().then(dotenvy::dotenv);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match dotenv {
        Some(Ok(path)) => tracing::info!("Loaded environment from {}", path.display()),
        Some(Err(e)) => tracing::info!("No .env file loaded: {}", e),
        None => {}
    }

    let config = AppConfig::from_env().context("failed to load configuration")?;
    tracing::info!("Starting menu API in {:?} mode", config.environment);

    let manager = DatabaseManager::connect(&config.mongo)
        .await
        .context("failed to connect to MongoDB")?;

    let repo = Arc::new(MongoMenuRepository::new(&manager));
    tracing::info!(
        "Menu store: collection {} (operation timeout {:?})",
        MongoMenuRepository::COLLECTION,
        MongoMenuRepository::OPERATION_TIMEOUT
    );
    let menus = MenuService::new(repo);
    let app = router(AppState::new(menus), &config.server);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Menu API listening on http://{}", bind_addr);

    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = stop_rx.await;
            })
            .await
    });

    shutdown_signal().await;
    tracing::info!("Shutdown signal received, draining for up to {:?}", SHUTDOWN_GRACE);
    let _ = stop_tx.send(());

    match tokio::time::timeout(SHUTDOWN_GRACE, server).await {
        Ok(Ok(Ok(()))) => tracing::info!("Server stopped"),
        Ok(Ok(Err(e))) => tracing::error!("Server error during shutdown: {}", e),
        Ok(Err(e)) => tracing::error!("Server task failed: {}", e),
        Err(_) => tracing::warn!("Forced shutdown after {:?}", SHUTDOWN_GRACE),
    }

    manager.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
