//! CLI administration tool for Condensed.
//!
//! Inspects and populates the URL store without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all records
//! cargo run --bin condensed-admin -- urls list
//!
//! # Condense a URL (prompts when the URL is omitted)
//! cargo run --bin condensed-admin -- urls condense https://example.com/
//!
//! # Count records
//! cargo run --bin condensed-admin -- urls count
//!
//! # Check database connection / apply migrations
//! cargo run --bin condensed-admin -- db check
//! cargo run --bin condensed-admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Reads the same configuration as the server (see `condensed::config`);
//! `DATABASE_URL` or the `DB_*` components are required, and `URL` sets the
//! base of printed short links.

use condensed::application::services::CondenseService;
use condensed::config::{self, Config};
use condensed::infrastructure::persistence::PgUrlRepository;
use condensed::server;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing Condensed.
#[derive(Parser)]
#[command(name = "condensed-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and create short links
    Urls {
        #[command(subcommand)]
        action: UrlsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum UrlsAction {
    /// List all stored records
    List,

    /// Condense a URL, printing its short link
    Condense {
        /// URL to condense (prompted for when omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Count stored records
    Count,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending schema migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Failed to load configuration")?;
    let pool = server::connect(&config).await?;

    match cli.command {
        Commands::Urls { action } => handle_urls_action(action, &pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches short link commands.
async fn handle_urls_action(action: UrlsAction, pool: &PgPool, config: &Config) -> Result<()> {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));
    let service = CondenseService::new(repo);

    match action {
        UrlsAction::List => list_urls(&service, config).await?,
        UrlsAction::Condense { url, yes } => condense_url(&service, config, url, yes).await?,
        UrlsAction::Count => count_urls(&service).await?,
    }

    Ok(())
}

/// Lists every record with its short link.
///
/// # Output Format
///
/// ```text
/// 📋 Short links
///
///   Slug      Created           Original URL
///   ────────────────────────────────────────────────────────────
///   0a1b2c3d  2024-01-15 10:30  https://example.com
/// ```
async fn list_urls(service: &CondenseService, config: &Config) -> Result<()> {
    println!("{}", "📋 Short links".bright_blue().bold());
    println!();

    let records = match service.list().await {
        Ok(records) => records,
        Err(condensed::AppError::NotFound(_)) => {
            println!("{}", "  No urls found".yellow());
            println!();
            println!(
                "  Create one with: {} condensed-admin urls condense <URL>",
                "cargo run --bin".bright_cyan()
            );
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to list urls: {}", e)),
    };

    println!(
        "  {:<12} {:<17} {}",
        "Slug".bright_white().bold(),
        "Created".bright_white().bold(),
        "Original URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<12} {:<17} {}",
            record.slug.cyan(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.original_url
        );
    }

    println!();
    println!(
        "  Total: {}  (links under {})",
        records.len().to_string().bright_white().bold(),
        config.base_url.bright_cyan()
    );
    println!();

    Ok(())
}

/// Condenses a URL with interactive prompts.
///
/// Runs the same workflow as `POST /condense`, so an already-condensed URL
/// prints its existing short link.
async fn condense_url(
    service: &CondenseService,
    config: &Config,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✂️  Condense URL".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Condense {}?", url))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let record = service
        .condense(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to condense URL: {}", e))?;

    println!();
    println!("{}", "✅ Short link ready".green().bold());
    println!("  Original: {}", record.original_url.cyan());
    println!(
        "  Short:    {}",
        record.short_url(&config.base_url).bright_yellow().bold()
    );
    println!();

    Ok(())
}

/// Prints the number of stored records.
async fn count_urls(service: &CondenseService) -> Result<()> {
    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count urls: {}", e))?;

    println!("  Links: {}", count.to_string().bright_green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;
            let version: String = sqlx::query_scalar("SHOW server_version")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Server version: {}", version.bright_white());
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
        DbAction::Migrate => {
            server::migrate(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
