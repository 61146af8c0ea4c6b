//! Campaign status report.

use chrono::Utc;
use tracing::info;

use merchdesk_admin::db::{CollectionRepository, PgDocumentStore};

/// Log every collection, in display order, with its campaign status today.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a document is malformed.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = PgDocumentStore::new(super::connect().await?);
    let collections = CollectionRepository::new(&store).list().await?;
    let now = Utc::now();

    info!("Campaigns ({} collections)", collections.len());
    for collection in &collections {
        info!(
            "  #{:<3} {:<9} {} -> {}  {} [{}]",
            collection.index,
            collection.campaign_status(now).label(),
            collection.campaign_duration.start_date,
            collection.campaign_duration.end_date,
            collection.title,
            collection.id,
        );
    }

    Ok(())
}
