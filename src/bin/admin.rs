//! CLI administration tool for hamster.
//!
//! Provides commands for generating creation secrets and inspecting the
//! embedded database without going through the HTTP surface.
//!
//! # Usage
//!
//! ```bash
//! # Generate a fresh creation secret
//! cargo run --bin admin -- secret generate
//!
//! # Check that the database opens and is readable
//! cargo run --bin admin -- db check
//!
//! # Show database info
//! cargo run --bin admin -- db info
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_PATH` (optional): Path of the redb file (default: `data/links.redb`)
//!
//! # Features
//!
//! - **Secret Management**: Generate high-entropy creation secrets
//! - **Database Tools**: Open checks and store info
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use hamster::domain::repositories::LinkRepository;
use hamster::infrastructure::persistence::{RedbLinkRepository, open_database};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing hamster.
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
    /// Manage the creation secret
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Secret management subcommands.
#[derive(Subcommand)]
enum SecretAction {
    /// Generate a new creation secret
    Generate,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check that the database opens and is readable
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Secret { action } => handle_secret_action(action),
        Commands::Db { action } => handle_db_action(action).await?,
    }

    Ok(())
}

/// Dispatches secret management commands.
fn handle_secret_action(action: SecretAction) {
    match action {
        SecretAction::Generate => generate_secret(),
    }
}

/// Generates and prints a fresh creation secret.
///
/// The secret is never stored anywhere. It only becomes active once the
/// server is started with it in the environment.
fn generate_secret() {
    println!("{}", "🔑 Generate Creation Secret".bright_blue().bold());
    println!();

    let secret = random_secret();

    println!("  Secret: {}", secret.bright_yellow().bold());
    println!();
    println!("{}", "Add this to your environment:".bright_white());
    println!("  {}={}", "SECRET".bright_cyan(), secret.bright_yellow());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -d \"url=https://example.com\" -d \"secret={}\" http://localhost:5050/",
        secret.bright_yellow()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction) -> Result<()> {
    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/links.redb".to_string());

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database...".bright_blue());

            let repo = open_repository(&database_path)?;
            repo.count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read links table: {}", e))?;

            println!("{}", "✅ Database OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let repo = open_repository(&database_path)?;
            let links = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read links table: {}", e))?;
            let size = std::fs::metadata(&database_path)?.len();

            println!("  Path:  {}", database_path.bright_white());
            println!("  Size:  {} bytes", size.to_string().bright_white());
            println!("  Links: {}", links.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}

/// Opens the database and wraps it in a repository.
fn open_repository(database_path: &str) -> Result<RedbLinkRepository> {
    let db = Arc::new(open_database(database_path)?);
    Ok(RedbLinkRepository::new(db))
}

/// Generates a cryptographically random secret.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
fn random_secret() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const SECRET_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..SECRET_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
