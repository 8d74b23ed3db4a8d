use anyhow::{Context, Result};
use product::{
    config::myconfig::Config, di::DependenciesInjectDeps, handler::AppRouter, state::AppState,
};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::{LogOptions, Telemetry, init_logger, run_metrics_collector},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let telemetry = match config.otel_endpoint.as_deref() {
        Some(endpoint) => Some(
            Telemetry::init("product-service", endpoint)
                .context("Failed to initialize telemetry")?,
        ),
        None => None,
    };

    init_logger(
        telemetry.as_ref().map(Telemetry::logger_provider),
        "product-service",
        LogOptions {
            is_dev: config.is_dev,
            enable_file: config.enable_file_log,
        },
    );

    info!("🚀 Starting Product Service initialization...");

    let pool = match ConnectionManager::new_pool(
        config.database.connect_options(),
        &config.database.pool_settings(),
    )
    .await
    {
        Ok(pool) => {
            info!("✅ Connected to MySQL database successfully");
            pool
        }
        Err(e) => {
            error!("💀 Failed to connect to MySQL database: {e}");
            return Err(e.context("Database connectivity check failed"));
        }
    };

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(DependenciesInjectDeps::from_pool(pool.clone()));

    tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

    let serve_result = AppRouter::serve(config.listen_addr(), state)
        .await
        .context("Failed to start server");

    info!("🛑 Shutting down Product Service...");

    pool.close().await;

    if let Some(telemetry) = telemetry {
        if let Err(e) = telemetry.shutdown() {
            error!("Failed to shutdown telemetry: {}", e);
        }
    }

    serve_result?;

    info!("✅ Product Service shutdown complete.");
    Ok(())
}

async fn run_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
