//! Campaign status derivation.
//!
//! A collection runs as a campaign between a start date and an end date.
//! Both bounds are normalized to midnight UTC and compared with the current
//! UTC calendar day, so every instant of the same day yields the same status.
//! Both the start day and the end day are inside the campaign.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::CampaignStatus;

/// A campaign window as stored on a collection document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignDuration {
    pub start_date: String,
    pub end_date: String,
}

impl CampaignDuration {
    #[must_use]
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Status of this campaign at `now`.
    #[must_use]
    pub fn status(&self, now: DateTime<Utc>) -> CampaignStatus {
        campaign_status(&self.start_date, &self.end_date, now)
    }
}

/// Parse a stored campaign date into its UTC calendar day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (converted to UTC first), and
/// zone-less `YYYY-MM-DDTHH:MM:SS` timestamps (read as UTC).
#[must_use]
pub fn parse_campaign_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Derive the campaign status for a `(start_date, end_date)` pair at `now`.
///
/// - `Ended` once the current UTC day is after the end date
/// - `Upcoming` while the current UTC day is before the start date
/// - `Active` otherwise
///
/// A bound that cannot be parsed places no constraint on the result.
#[must_use]
pub fn campaign_status(start_date: &str, end_date: &str, now: DateTime<Utc>) -> CampaignStatus {
    let today = now.date_naive();

    if parse_campaign_date(end_date).is_some_and(|end| today > end) {
        CampaignStatus::Ended
    } else if parse_campaign_date(start_date).is_some_and(|start| today < start) {
        CampaignStatus::Upcoming
    } else {
        CampaignStatus::Active
    }
}
