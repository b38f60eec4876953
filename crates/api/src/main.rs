use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use cyberpark_core::clock::SystemClock;
use cyberpark_core::controller::SlotController;
use cyberpark_core::layout::SlotLayout;
use cyberpark_core::store::{MemorySlotStore, SlotStore};
use cyberpark_db::PgSlotStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cyberpark_api::config::ServerConfig;
use cyberpark_api::router::build_app_router;
use cyberpark_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cyberpark_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Slot store ---
    let store = open_store(&config).await?;

    // --- Controller + seeding ---
    let controller = Arc::new(SlotController::new(store, Arc::new(SystemClock)));
    let seeded = controller
        .seed_if_empty(&SlotLayout::default())
        .await
        .context("Failed to seed slot inventory")?;
    if seeded > 0 {
        tracing::info!(slots = seeded, "Initial slot inventory created");
    }

    // --- App state ---
    let state = AppState {
        controller,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config).context("Failed to build router")?;

    // --- Start server ---
    let host = config
        .host
        .parse::<std::net::IpAddr>()
        .with_context(|| format!("Invalid HOST address {:?}", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Connect to PostgreSQL when `DATABASE_URL` is set, otherwise fall back to
/// the in-memory store.
async fn open_store(config: &ServerConfig) -> anyhow::Result<Arc<dyn SlotStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, using in-memory slot store (state is not persisted)");
        return Ok(Arc::new(MemorySlotStore::new()));
    };

    let pool = cyberpark_db::create_pool(database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    cyberpark_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    cyberpark_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgSlotStore::new(pool)))
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
