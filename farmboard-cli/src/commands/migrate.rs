//! Board schema migration command

use anyhow::{Context, Result};
use clap::Parser;
use farmboard_server::db::{create_pool, migrations};

use super::database_config;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides the DB_* variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the board schema and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let db_config = database_config(args.database_url)?;

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to migrate board schema")?;

    pool.close().await;
    println!("board schema is up to date");
    Ok(())
}
