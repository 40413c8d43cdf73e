//! CLI administration tool for user-service.
//!
//! Manages users and checks the database without going through the HTTP API.
//! All user commands go through [`UserService`], so validation and error
//! semantics match the HTTP endpoints.
//!
//! # Usage
//!
//! ```bash
//! # List the first page of users
//! cargo run --bin admin -- users list
//!
//! # Show one user with their age
//! cargo run --bin admin -- users show 42
//!
//! # Create a user (prompts for missing fields)
//! cargo run --bin admin -- users create --name "Ada Lovelace" --dob 1815-12-10
//!
//! # Delete a user
//! cargo run --bin admin -- users delete 42
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server, see `user_service::config`.

use user_service::application::services::UserService;
use user_service::config;
use user_service::logging;
use user_service::domain::pagination::PaginationWindow;
use user_service::domain::validation::UserInput;
use user_service::infrastructure::persistence::PgUserRepository;
use user_service::server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-service.
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
    Users {
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
    /// List users, one page at a time
    List {
        /// Page number (invalid values fall back to 1)
        #[arg(short, long)]
        page: Option<String>,

        /// Page size (invalid values fall back to 10)
        #[arg(short, long)]
        limit: Option<String>,
    },

    /// Show a user with their age
    Show { id: i32 },

    /// Create a user
    Create {
        /// Full name
        #[arg(short, long)]
        name: Option<String>,

        /// Date of birth (YYYY-MM-DD)
        #[arg(short, long)]
        dob: Option<String>,
    },

    /// Delete a user
    Delete {
        id: i32,

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

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    logging::init(&config.log_level, &config.log_format);

    let pool = server::connect_pool(&config).await?;

    match cli.command {
        Commands::Users { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    pool.close().await;
    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repository = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repository);

    match action {
        UserAction::List { page, limit } => list_users(&service, page, limit).await?,
        UserAction::Show { id } => show_user(&service, id).await?,
        UserAction::Create { name, dob } => create_user(&service, name, dob).await?,
        UserAction::Delete { id, yes } => delete_user(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists one page of users.
///
/// # Output Format
///
/// ```text
/// Users (page 1, limit 10)
///
///   ID     Name                           Date of birth
///   ─────────────────────────────────────────────────────
///   1      Ada Lovelace                   1815-12-10
/// ```
async fn list_users(
    service: &UserService,
    page: Option<String>,
    limit: Option<String>,
) -> Result<()> {
    let window = PaginationWindow::normalize(page.as_deref(), limit.as_deref());

    println!(
        "{}",
        format!("Users (page {}, limit {})", window.page, window.limit)
            .bright_blue()
            .bold()
    );
    println!();

    let users = service
        .list_users(page.as_deref(), limit.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Date of birth".bright_white().bold()
    );
    println!("  {}", "─".repeat(55).bright_black());

    for user in &users {
        let dob = user
            .dob
            .map(|d| d.to_string().normal())
            .unwrap_or_else(|| "missing".red());

        println!(
            "  {:<6} {:<30} {}",
            user.id.to_string().bright_black(),
            user.name.cyan(),
            dob
        );
    }

    println!();
    println!("  Shown: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shows one user with their derived age.
async fn show_user(service: &UserService, id: i32) -> Result<()> {
    let profile = service
        .get_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch user {}: {}", id, e))?;

    println!("{}", "User".bright_blue().bold());
    println!();
    println!("  ID:            {}", profile.id.to_string().bright_black());
    println!("  Name:          {}", profile.name.cyan());
    println!("  Date of birth: {}", profile.dob);
    println!("  Age:           {}", profile.age.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Creates a user, prompting for fields not given on the command line.
async fn create_user(
    service: &UserService,
    name: Option<String>,
    dob: Option<String>,
) -> Result<()> {
    println!("{}", "Create User".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Name").interact_text()?,
    };

    let dob = match dob {
        Some(d) => d,
        None => Input::new()
            .with_prompt("Date of birth (YYYY-MM-DD)")
            .interact_text()?,
    };

    let user = service
        .create_user(UserInput::new(name, dob))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} {}",
        "User created with id".green().bold(),
        user.id.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a user after confirmation.
///
/// # Safety
///
/// - Shows the user before deleting
/// - Requires confirmation (default: No) unless `--yes` is given
async fn delete_user(service: &UserService, id: i32, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete User".bright_blue().bold());
    println!();

    let profile = service
        .get_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch user {}: {}", id, e))?;

    println!("  User: {}", profile.name.cyan());
    println!("  ID:   {}", profile.id.to_string().bright_black());
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

    service
        .delete_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "User deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            server::migrate(pool).await?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
