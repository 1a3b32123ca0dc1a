//! recording-sessions server entry point.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use recording_sessions::adapters::http::app_router;
use recording_sessions::adapters::memory::{InMemoryJobQueue, InMemoryStore};
use recording_sessions::adapters::postgres::{
    PostgresJobRepository, PostgresMediaRepository, PostgresSessionRepository,
    PostgresSourceRepository,
};
use recording_sessions::adapters::redis::RedisJobQueue;
use recording_sessions::adapters::websocket::RoomManager;
use recording_sessions::application::Services;
use recording_sessions::config::{AppConfig, QueueBackend, QueueConfig};
use recording_sessions::ports::{
    JobQueue, JobRepository, MediaRepository, SessionRepository, SourceRepository,
};
use recording_sessions::telemetry;

struct Repositories {
    sessions: Arc<dyn SessionRepository>,
    sources: Arc<dyn SourceRepository>,
    media: Arc<dyn MediaRepository>,
    jobs: Arc<dyn JobRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    telemetry::init_logging(&config.server)?;

    tracing::info!(
        environment = ?config.server.environment,
        storage = ?config.storage.backend,
        queue = ?config.queue.backend,
        "Starting recording-sessions"
    );

    let repos = build_repositories(&config).await?;
    let queue = build_queue(&config.queue).await?;
    let rooms = Arc::new(RoomManager::new(config.server.room_capacity));

    let services = Services::new(
        repos.sessions,
        repos.sources,
        repos.media,
        repos.jobs,
        rooms.clone(),
        queue,
        &config.queue.name,
    );

    services
        .add_job
        .ensure_queue()
        .await
        .with_context(|| format!("Job queue {:?} is not available", config.queue.name))?;

    let app = app_router(services, rooms, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_repositories(config: &AppConfig) -> anyhow::Result<Repositories> {
    if !config.storage.is_postgres() {
        tracing::warn!("Using in-memory storage; data is lost on restart");
        let store = Arc::new(InMemoryStore::new());
        return Ok(Repositories {
            sessions: store.clone(),
            sources: store.clone(),
            media: store.clone(),
            jobs: store,
        });
    }

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations applied");
    }

    Ok(Repositories {
        sessions: Arc::new(PostgresSessionRepository::new(pool.clone())),
        sources: Arc::new(PostgresSourceRepository::new(pool.clone())),
        media: Arc::new(PostgresMediaRepository::new(pool.clone())),
        jobs: Arc::new(PostgresJobRepository::new(pool)),
    })
}

async fn build_queue(config: &QueueConfig) -> anyhow::Result<Arc<dyn JobQueue>> {
    match config.backend {
        QueueBackend::Memory => {
            tracing::warn!("Using in-memory job queue; no worker will consume it");
            Ok(Arc::new(InMemoryJobQueue::new()))
        }
        QueueBackend::Redis => {
            let queue = tokio::time::timeout(config.timeout(), RedisJobQueue::connect(&config.url))
                .await
                .context("Timed out connecting to Redis")?
                .context("Failed to connect to Redis")?;
            Ok(Arc::new(queue))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
