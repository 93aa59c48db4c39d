//! jobsift - paginated job-search ingest pipeline

mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobsift_core::application::{Crawler, IngestService};
use jobsift_core::port::JobStore;
use jobsift_infra_fs::FileCursorStore;
use jobsift_infra_postgres::{create_pool, PgJobStore};
use jobsift_infra_serpapi::SerpApiClient;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "jobsift")]
#[command(about = "Fetch paginated job search results and load them into PostgreSQL", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: fetch all pages, normalize, upsert
    Crawl {
        /// Search query (overrides JOBSIFT_QUERY)
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Create the jobs table if it does not exist
    Migrate,

    /// Check database connectivity
    CheckDb,

    /// Delete the persisted pagination token (required when switching queries)
    ClearCursor,
}

fn init_logging() {
    let log_format = std::env::var("JOBSIFT_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobsift=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

async fn run_crawl(query_override: Option<String>) -> Result<()> {
    let settings = config::Settings::from_env()?;
    let query = query_override.unwrap_or_else(|| settings.query.clone());

    // DI wiring
    let fetcher = Arc::new(SerpApiClient::new(
        settings.serpapi_api_key.clone(),
        Duration::from_secs(settings.http_timeout_secs),
    )?);
    let cursor = Arc::new(FileCursorStore::new(&settings.cursor_path));

    info!(db_host = %settings.db.host, dbname = %settings.db.dbname, "Connecting to database");
    let pool = create_pool(&settings.db).await?;
    let store = Arc::new(PgJobStore::new(pool));

    let service = IngestService::new(Crawler::new(fetcher, cursor), store);
    let summary = service.run(&query).await?;

    println!(
        "Summary: {} fetched, {} inserted, {} skipped, {} failed",
        summary.fetched, summary.stats.inserted, summary.stats.skipped, summary.stats.failed
    );
    Ok(())
}

async fn run_migrate() -> Result<()> {
    let db = config::db_from_env()?;
    let pool = create_pool(&db).await?;
    PgJobStore::new(pool).ensure_schema().await?;
    println!("Schema is up to date");
    Ok(())
}

async fn run_check_db() -> Result<()> {
    let db = config::db_from_env()?;
    let pool = create_pool(&db).await?;
    let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
    anyhow::ensure!(one == 1, "unexpected probe result");
    println!("Connection successful ({}:{}/{})", db.host, db.port, db.dbname);
    Ok(())
}

fn run_clear_cursor() -> Result<()> {
    let path = config::cursor_path_from_env();
    let cursor = FileCursorStore::new(&path);
    cursor.clear()?;
    println!("Cleared pagination state at {}", path);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    info!("jobsift v{} starting", VERSION);

    let cli = Cli::parse();
    match cli.command {
        Commands::Crawl { query } => run_crawl(query).await,
        Commands::Migrate => run_migrate().await,
        Commands::CheckDb => run_check_db().await,
        Commands::ClearCursor => run_clear_cursor(),
    }
}
