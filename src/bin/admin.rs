//! CLI administration tool for userfy.
//!
//! Works directly against the SQLite database, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Create the users table if it is missing
//! cargo run --bin admin -- db init
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Delete a user (asks for confirmation unless -y)
//! cargo run --bin admin -- user delete 3
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (default `sqlite://database/users.db`)

use userfy::domain::repositories::UserRepository;
use userfy::infrastructure::persistence::{SqliteUserRepository, database};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing userfy.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Delete a user by id
    Delete {
        /// User id
        id: i64,

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

    /// Create the users table if it does not exist
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://database/users.db".to_string());

    let pool = database::connect(&database_url, 1, Duration::from_secs(10))
        .await
        .with_context(|| format!("Failed to open database '{database_url}'"))?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: SqlitePool) -> Result<()> {
    let repo = SqliteUserRepository::new(Arc::new(pool));

    match action {
        UserAction::List => list_users(&repo).await,
        UserAction::Delete { id, yes } => delete_user(&repo, id, yes).await,
    }
}

/// Prints every user as a table.
async fn list_users(repo: &SqliteUserRepository) -> Result<()> {
    println!("{}", "Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<24} {:<32} {:<4}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold(),
        "Age".bright_white().bold()
    );
    println!("  {}", "-".repeat(70).bright_black());

    for user in &users {
        println!(
            "  {:<6} {:<24} {:<32} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            user.email,
            user.age
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a user after showing it and asking for confirmation.
async fn delete_user(repo: &SqliteUserRepository, id: i64, skip_confirm: bool) -> Result<()> {
    let user = repo
        .find_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  ID:    {}", user.id.to_string().bright_black());
    println!("  Name:  {}", user.name.cyan());
    println!("  Email: {}", user.email);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let removed = repo
        .delete_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    if removed {
        println!("{}", "User deleted".green().bold());
    } else {
        println!("{}", "User was already gone".yellow());
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(pool).await?;
            if one == 1 {
                println!("{}", "Database connection OK".green().bold());
            }

            let has_table: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'users'",
            )
            .fetch_one(pool)
            .await?;

            if has_table == 0 {
                println!(
                    "{}",
                    "users table is missing, run `admin db init`".yellow()
                );
            } else {
                let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                    .fetch_one(pool)
                    .await?;
                println!("  Users: {}", count.to_string().bright_white().bold());
            }
        }
        DbAction::Init => {
            database::ensure_schema(pool)
                .await
                .context("Failed to create users table")?;
            println!("{}", "users table ready".green().bold());
        }
    }

    Ok(())
}
