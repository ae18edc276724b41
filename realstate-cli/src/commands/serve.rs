//! HTTP server command
//!
//! Loads configuration, opens the connection pool and runs the server until
//! Ctrl+C or SIGTERM.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use realstate_server::config::DEFAULT_CONFIG_PATH;
use realstate_server::db::create_pool;
use realstate_server::http::{run_server, ServerConfig};
use realstate_server::AppConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Path to the configuration file
    #[arg(long, short = 'c', env = "REALSTATE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Address to bind to (overrides rest.host/rest.port)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = AppConfig::load(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;

    let mut server_config = ServerConfig::from(&config.rest);
    if let Some(bind) = args.bind {
        server_config.bind_addr = bind;
    }
    server_config.cors_permissive |= args.cors_permissive;

    tracing::info!("Starting realstate server on {}", server_config.bind_addr);

    let pool = create_pool(&config.database)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {} at {}:{}",
                config.database.database, config.database.host, config.database.port
            )
        })?;

    // Blocks until shutdown
    run_server(pool, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
