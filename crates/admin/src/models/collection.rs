//! Promotional collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use merchdesk_core::{
    CampaignDuration, CampaignStatus, CollectionId, CollectionType, CollectionVisibility,
    ProductId,
};

/// A product's membership in a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionProduct {
    pub id: ProductId,
    #[serde(default)]
    pub index: u32,
}

/// A curated, time-bound grouping of products shown as a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    /// Display position in the storefront and admin table.
    #[serde(default)]
    pub index: u32,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub campaign_duration: CampaignDuration,
    pub collection_type: CollectionType,
    #[serde(default)]
    pub products: Vec<CollectionProduct>,
    #[serde(default)]
    pub visibility: CollectionVisibility,
}

impl Collection {
    /// Campaign status at `now`.
    #[must_use]
    pub fn campaign_status(&self, now: DateTime<Utc>) -> CampaignStatus {
        self.campaign_duration.status(now)
    }
}
