//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use farmboard_server::db::{create_pool_with_options, migrations};
use farmboard_server::{run_server, ServerConfig};

use super::database_config;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "FARMBOARD_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (overrides the DB_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Do not create the board schema at startup
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = database_config(args.database_url)?;

    tracing::info!("Starting farmboard server on {}", args.bind);

    let pool = create_pool_with_options(&db_config, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    if args.skip_migrations {
        tracing::debug!("skipping board schema migrations");
    } else {
        migrations::run(&pool)
            .await
            .context("Failed to migrate board schema")?;
    }

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
