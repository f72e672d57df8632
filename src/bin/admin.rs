//! CLI administration tool for message-board.
//!
//! Inspects stored messages, clears the cached message list and checks the
//! database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Print every message
//! cargo run --bin admin -- messages list
//!
//! # Count messages
//! cargo run --bin admin -- messages count
//!
//! # Drop the cached message list from Redis
//! cargo run --bin admin -- cache clear
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` / `DB_*`: PostgreSQL connection (required for `messages` and `db`)
//! - `REDIS_URL` / `REDIS_*`: Redis connection (required for `cache`)

use message_board::application::services::message_cache::ALL_MESSAGES_KEY;
use message_board::config::{Config, mask_connection_string};
use message_board::domain::repositories::MessageRepository;
use message_board::infrastructure::cache::{CacheService, RedisCache};
use message_board::infrastructure::persistence::PgMessageRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing message-board.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect stored messages
    Messages {
        #[command(subcommand)]
        action: MessagesAction,
    },

    /// Manage the message list cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum MessagesAction {
    /// Print all messages
    List,

    /// Print the number of stored messages
    Count,
}

#[derive(Subcommand)]
enum CacheAction {
    /// Delete the cached message list so the next read reloads it
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    match cli.command {
        Commands::Messages { action } => {
            let pool = connect_database(&config).await?;
            handle_messages_action(action, pool).await?
        }
        Commands::Cache { action } => handle_cache_action(action, &config).await?,
        Commands::Db { action } => {
            let pool = connect_database(&config).await?;
            handle_db_action(action, &pool).await?
        }
    }

    Ok(())
}

async fn connect_database(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL (or DB_HOST/DB_USER/DB_PASSWORD/DB_NAME) must be set")?;

    PgPool::connect(database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(database_url)
            )
        })
}

/// Dispatches message inspection commands.
async fn handle_messages_action(action: MessagesAction, pool: PgPool) -> Result<()> {
    let repo = PgMessageRepository::new(Arc::new(pool));

    let messages = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    match action {
        MessagesAction::List => {
            println!("{}", "💬 Messages".bright_blue().bold());
            println!();

            if messages.is_empty() {
                println!("{}", "  No messages yet".bright_black());
            }

            for message in &messages {
                println!(
                    "  {} {} {}",
                    format!("#{}", message.id).cyan(),
                    message
                        .created_at
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string()
                        .bright_black(),
                    message.content
                );
            }
            println!();
        }
        MessagesAction::Count => {
            println!(
                "  Messages: {}",
                messages.len().to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}

/// Dispatches cache commands.
async fn handle_cache_action(action: CacheAction, config: &Config) -> Result<()> {
    match action {
        CacheAction::Clear { yes } => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL (or REDIS_HOST) must be set")?;

            println!("{}", "🧹 Clear message cache".bright_blue().bold());
            println!("  Redis: {}", mask_connection_string(redis_url).cyan());
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete the cached message list?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let cache = RedisCache::connect(redis_url).await?;
            cache.delete(ALL_MESSAGES_KEY).await?;

            println!("{}", "✅ Cache cleared".green().bold());
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
