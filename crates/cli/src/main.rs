//! Merchdesk CLI - database migrations and store management.
//!
//! # Usage
//!
//! ```bash
//! # Create the document table
//! md-cli migrate
//!
//! # Load documents from a YAML file
//! md-cli seed fixtures/storefront.yaml
//!
//! # Print every collection with its campaign status
//! md-cli campaigns
//! ```
//!
//! All commands read `ADMIN_DATABASE_URL` (or `DATABASE_URL`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "md-cli")]
#[command(author, version, about = "Merchdesk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Write documents from a YAML file into the store
    Seed {
        /// YAML file mapping collection names to lists of documents
        file: String,
    },
    /// List collections with their current campaign status
    Campaigns,
}

#[tokio::main]
async fn main() {
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
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file } => commands::seed::run(&file).await?,
        Commands::Campaigns => commands::campaigns::run().await?,
    }
    Ok(())
}
