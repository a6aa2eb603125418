//! CLI administration tool for api-console.
//!
//! Console users are created out-of-band; the HTTP service only reads them.
//! This tool is the way to add and inspect records.
//!
//! # Usage
//!
//! ```bash
//! # Create a console user (prompts for missing fields)
//! cargo run --bin admin -- user create
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Show a single user
//! cargo run --bin admin -- user show alice
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`: PostgreSQL connection

use api_console::config::Config;
use api_console::domain::entities::NewCredential;
use api_console::domain::repositories::CredentialRepository;
use api_console::infrastructure::persistence::PgCredentialRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing api-console.
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
    /// Manage console users
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

/// Console user subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new console user
    Create {
        /// Username (unique, up to 25 characters)
        #[arg(short, long)]
        username: Option<String>,

        /// Password (up to 30 characters)
        #[arg(short, long)]
        password: Option<String>,

        /// Designation code (up to 5 characters)
        #[arg(short, long)]
        designation: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all console users
    List,

    /// Show a console user
    Show {
        /// Username to look up
        username: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches console user commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgCredentialRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            password,
            designation,
            yes,
        } => {
            create_user(repo, username, password, designation, yes).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
        UserAction::Show { username } => {
            show_user(repo, username).await?;
        }
    }

    Ok(())
}

/// Creates a console user with interactive prompts for missing fields.
///
/// # Flow
///
/// 1. Prompt for username, password and designation (or use provided values)
/// 2. Validate field lengths
/// 3. Confirm creation (unless `--yes` flag)
/// 4. Store in database; duplicate usernames are rejected
async fn create_user(
    repo: Arc<PgCredentialRepository>,
    username: Option<String>,
    password: Option<String>,
    designation: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create Console User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    let designation = match designation {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Designation")
            .with_initial_text("user")
            .interact_text()?,
    };

    let credential = NewCredential::new(username, password, designation)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!();
    println!("{}", "User details:".bright_white().bold());
    println!("  Username:    {}", credential.username.cyan());
    println!("  Designation: {}", credential.designation.cyan());
    println!();
    println!(
        "{}",
        "⚠️  Passwords are stored as entered, without hashing.".yellow()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let record = repo
        .create(&credential)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✅ User created with ID".green().bold(),
        record.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Lists all console users.
///
/// # Output Format
///
/// ```text
/// 📋 Console Users
///
///   ID  Username                  Designation  Created
///   ──────────────────────────────────────────────────────────────
///   1   alice                     ad           2024-01-15 10:30
/// ```
async fn list_users(repo: Arc<PgCredentialRepository>) -> Result<()> {
    println!("{}", "📋 Console Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<25} {:<12} {:<20}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Designation".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(64).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<25} {:<12} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.designation,
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shows a single console user by username.
async fn show_user(repo: Arc<PgCredentialRepository>, username: String) -> Result<()> {
    let user = repo
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("{}", "👤 Console User".bright_blue().bold());
    println!();
    println!("  ID:          {}", user.id.to_string().bright_black());
    println!("  Username:    {}", user.username.cyan());
    println!("  Designation: {}", user.designation);
    println!(
        "  Created:     {}",
        user.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

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

            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM console_users")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL:    {}", version.bright_white());
            println!(
                "  Console users: {}",
                users.to_string().bright_green().bold()
            );
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠️  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
