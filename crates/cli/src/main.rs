//! Aura CLI - Catalog seeding, publishing, and administration tools.
//!
//! # Usage
//!
//! ```bash
//! # Print the public catalog (what a visitor sees)
//! aura-cli show
//!
//! # Print the draft catalog as a logged-in admin
//! aura-cli show -e admin@example.com -p password
//!
//! # Reset the data directory to the shipped catalog
//! aura-cli seed reset
//!
//! # Manage dashboard users
//! aura-cli admin create -e staff@example.com -p secret
//! aura-cli admin passwd -e staff@example.com -p new-secret
//! aura-cli admin delete -e staff@example.com
//!
//! # Bulk data management
//! aura-cli catalog export -f backup.json
//! aura-cli catalog import -f backup.json
//!
//! # Publish the current draft to visitors
//! aura-cli publish
//! ```
//!
//! # Environment Variables
//!
//! - `AURA_DATA_DIR` - Data directory holding the JSON collections
//! - `AURA_LATENCY_MS` - Artificial per-operation latency (default 200)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aura-cli")]
#[command(author, version, about = "Aura Living CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the catalog
    Show {
        /// Log in as this admin before reading (shows the draft)
        #[arg(short, long, requires = "password")]
        email: Option<String>,

        /// Password for the admin login
        #[arg(short, long, requires = "email")]
        password: Option<String>,
    },
    /// Seed data management
    Seed {
        #[command(subcommand)]
        action: SeedAction,
    },
    /// Manage dashboard users
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Bulk catalog import/export
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Publish the current draft as the public catalog
    Publish,
}

#[derive(Subcommand)]
enum SeedAction {
    /// Reset all collections to the shipped catalog
    Reset,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Create a new dashboard user (role: admin)
    Create {
        /// User's email address
        #[arg(short, long)]
        email: String,

        /// User's password
        #[arg(short, long)]
        password: String,
    },
    /// Delete a dashboard user by email
    Delete {
        /// User's email address
        #[arg(short, long)]
        email: String,
    },
    /// Update a dashboard user's password
    Passwd {
        /// User's email address
        #[arg(short, long)]
        email: String,

        /// New password
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Replace products and categories from a JSON file
    Import {
        /// Path to the import file
        #[arg(short, long)]
        file: String,
    },
    /// Write products and categories to a JSON file
    Export {
        /// Path to the export file
        #[arg(short, long)]
        file: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Show { email, password } => {
            commands::show::run(email.as_deref(), password.as_deref()).await?;
        }
        Commands::Seed { action } => match action {
            SeedAction::Reset => commands::seed::reset().await?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Create { email, password } => {
                commands::admin::create_user(&email, &password).await?;
            }
            AdminAction::Delete { email } => commands::admin::delete_user(&email).await?,
            AdminAction::Passwd { email, password } => {
                commands::admin::update_password(&email, &password).await?;
            }
        },
        Commands::Catalog { action } => match action {
            CatalogAction::Import { file } => commands::catalog::import(&file).await?,
            CatalogAction::Export { file } => commands::catalog::export(&file).await?,
        },
        Commands::Publish => commands::catalog::publish().await?,
    }
    Ok(())
}
