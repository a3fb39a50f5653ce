//! articles-api server binary
//!
//! Usage:
//!   articles-api --database-url mysql://...   # or DATABASE_URL env
//!   PORT=8080 articles-api                    # port from environment
//!   RUST_LOG=articles_api=debug articles-api  # fine-grained log control

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use articles_api::db::create_pool;
use articles_api::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "articles-api", version, about)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed arguments
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing()?;

    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    let bind_addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .context("invalid host/port")?;

    tracing::info!("Starting articles-api on {}", bind_addr);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    run_server(pool, ServerConfig { bind_addr })
        .await
        .context("Server error")?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
}
