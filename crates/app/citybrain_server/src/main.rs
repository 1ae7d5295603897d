//! CityBrain HTTP server binary.
//!
//! Connects to PostgreSQL at startup; if the database is unreachable the
//! service keeps running in a degraded "no persistence" mode rather than
//! exiting.

use clap::Parser;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};

/// CLI arguments for the CityBrain server.
#[derive(Parser, Debug)]
#[command(name = "citybrain_server", about = "CityBrain smart city assistant server")]
struct Args {
    /// Port to listen on.
    #[arg(long, default_value_t = 8000)]
    port: u16,

    /// PostgreSQL connection URL.
    #[arg(
        long,
        env = "DATABASE_URL",
        default_value = "postgres://localhost:5432/cityos"
    )]
    database_url: String,

    /// Maximum number of database connections in the pool.
    #[arg(long, default_value_t = 5)]
    max_connections: u32,
}

/// Connect and migrate, or fall back to degraded mode.
///
/// Both a failed connect and a failed migration produce `None`; neither is
/// fatal, per the chat endpoint's contract that answers never depend on
/// storage.
async fn connect_pool(args: &Args) -> Option<PgPool> {
    let pool = match PgPoolOptions::new()
        .max_connections(args.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .connect(&args.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            warn!("database unreachable, running without persistence: {e}");
            return None;
        }
    };

    info!("running database migrations");
    if let Err(e) = citybrain_api::migrate(&pool).await {
        warn!("migration failed, running without persistence: {e}");
        return None;
    }

    Some(pool)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,citybrain_api=debug,citybrain_core=debug".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    info!(database_url = %args.database_url, port = args.port, "starting citybrain_server");

    let pool = connect_pool(&args).await;

    let config = citybrain_api::config::ApiConfig {
        bind_addr: format!("0.0.0.0:{}", args.port),
        database_url: args.database_url,
    };

    let state = citybrain_api::AppState {
        pool,
        config: config.clone(),
    };

    let app = citybrain_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "CityBrain listening");

    axum::serve(listener, app).await?;

    Ok(())
}
