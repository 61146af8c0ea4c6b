//! Status enums stored on merchandising documents.
//!
//! Stored documents are loosely typed, and older records carry lower-case
//! values, so every enum here accepts both spellings when deserializing and
//! when parsing form input. They always serialize in upper case.

use serde::{Deserialize, Serialize};

/// Visibility of the page hero, a category, or a storefront section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    #[serde(alias = "visible")]
    Visible,
    #[default]
    #[serde(alias = "hidden")]
    Hidden,
}

impl Visibility {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visible => "VISIBLE",
            Self::Hidden => "HIDDEN",
        }
    }

    /// Returns the opposite visibility.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Maps a checkbox state to a visibility.
    #[must_use]
    pub const fn from_flag(visible: bool) -> Self {
        if visible { Self::Visible } else { Self::Hidden }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "VISIBLE" => Ok(Self::Visible),
            "HIDDEN" => Ok(Self::Hidden),
            _ => Err(format!("invalid visibility: {s}")),
        }
    }
}

/// Publication state of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionVisibility {
    #[serde(alias = "published")]
    Published,
    #[default]
    #[serde(alias = "draft")]
    Draft,
}

impl CollectionVisibility {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "PUBLISHED",
            Self::Draft => "DRAFT",
        }
    }
}

impl std::fmt::Display for CollectionVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CollectionVisibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PUBLISHED" => Ok(Self::Published),
            "DRAFT" => Ok(Self::Draft),
            _ => Err(format!("invalid collection visibility: {s}")),
        }
    }
}

/// How a collection is presented on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectionType {
    #[serde(alias = "featured_collection")]
    FeaturedCollection,
    #[serde(alias = "promotional_banner")]
    PromotionalBanner,
}

impl CollectionType {
    /// Returns the stored representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FeaturedCollection => "FEATURED_COLLECTION",
            Self::PromotionalBanner => "PROMOTIONAL_BANNER",
        }
    }
}

impl std::fmt::Display for CollectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Campaign status derived from a collection's campaign duration.
///
/// Never stored; see [`crate::campaign::campaign_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CampaignStatus {
    Ended,
    Upcoming,
    Active,
}

impl CampaignStatus {
    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ended => "Ended",
            Self::Upcoming => "Upcoming",
            Self::Active => "Active",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_accepts_either_case() {
        let upper: Visibility = serde_json::from_str("\"VISIBLE\"").unwrap();
        let lower: Visibility = serde_json::from_str("\"visible\"").unwrap();
        assert_eq!(upper, Visibility::Visible);
        assert_eq!(lower, Visibility::Visible);

        assert_eq!(
            serde_json::to_string(&Visibility::Hidden).unwrap(),
            "\"HIDDEN\""
        );
    }

    #[test]
    fn test_visibility_from_str() {
        assert_eq!("Hidden".parse::<Visibility>().unwrap(), Visibility::Hidden);
        assert!("shown".parse::<Visibility>().is_err());
    }

    #[test]
    fn test_visibility_toggle() {
        assert_eq!(Visibility::Visible.toggled(), Visibility::Hidden);
        assert_eq!(Visibility::Hidden.toggled(), Visibility::Visible);
        assert_eq!(Visibility::from_flag(true), Visibility::Visible);
    }

    #[test]
    fn test_collection_enums_roundtrip_stored_names() {
        let kind: CollectionType = serde_json::from_str("\"PROMOTIONAL_BANNER\"").unwrap();
        assert_eq!(kind, CollectionType::PromotionalBanner);
        assert_eq!(kind.to_string(), "PROMOTIONAL_BANNER");

        let visibility: CollectionVisibility = serde_json::from_str("\"published\"").unwrap();
        assert_eq!(visibility, CollectionVisibility::Published);
        assert_eq!(
            "draft".parse::<CollectionVisibility>().unwrap(),
            CollectionVisibility::Draft
        );
    }

    #[test]
    fn test_campaign_status_labels() {
        assert_eq!(CampaignStatus::Ended.to_string(), "Ended");
        assert_eq!(CampaignStatus::Upcoming.label(), "Upcoming");
        assert_eq!(CampaignStatus::Active.label(), "Active");
    }
}
