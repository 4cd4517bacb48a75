use pb_server::logger::{self, LogSink};
use pb_server::{AppState, build_router};

use std::error::Error;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside development
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = pb_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let sink = LogSink::select(config.log_file_path()?, config.logging.colored);
    logger::initialize(config.logging.level, sink)?;

    info!("Starting pb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = pb_db::create_pool(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    pb_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let app_state = AppState::from_config(pool.clone(), &config);
    if app_state.ttd_projects.is_empty() {
        warn!("TTD allow-list is empty, no project will carry finalBudgetTtd");
    }

    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}
