use axum_helpers::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_tasks::{handlers, PgTaskRepository, TaskService};
use tracing::info;

mod config;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Install the Prometheus recorder before any request is served
    let metrics = observability::init_metrics().clone();

    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    // Ensure the tasks table exists; unreachable database is fatal here
    domain_tasks::postgres::ensure_schema(&db)
        .await
        .map_err(|e| eyre::eyre!("Schema creation failed: {}", e))?;

    let service = TaskService::new(PgTaskRepository::new(db));
    let state = AppState { metrics };

    let app = routes::app(state, handlers::router(service));

    info!("Starting task API on {}", config.server.address());

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Task API shutdown complete");
    Ok(())
}
