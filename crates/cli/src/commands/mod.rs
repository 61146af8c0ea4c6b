//! CLI command implementations.

pub mod campaigns;
pub mod migrate;
pub mod seed;

use secrecy::SecretString;
use sqlx::PgPool;

use merchdesk_admin::db;

/// Connect to the admin database named by the environment.
///
/// # Errors
///
/// Returns an error if no database URL is set or the connection fails.
pub async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "ADMIN_DATABASE_URL not set")?;

    tracing::info!("Connecting to admin database...");
    Ok(db::create_pool(&database_url).await?)
}
