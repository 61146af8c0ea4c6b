//! Storefront page hero banner.

use serde::{Deserialize, Serialize};

use merchdesk_core::{PageHeroId, Visibility};

/// The banner shown at the top of the storefront.
///
/// A `VISIBLE` hero should carry a title, image and destination URL. The
/// editing form enforces that; the store does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageHero {
    pub id: PageHeroId,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub destination_url: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let hero: PageHero = serde_json::from_value(json!({ "id": "main" })).unwrap();
        assert_eq!(hero.visibility, Visibility::Hidden);
        assert!(hero.title.is_none());
    }

    #[test]
    fn test_null_fields_serialize_as_null() {
        let hero = PageHero {
            id: PageHeroId::new("main"),
            image: None,
            title: Some("Summer".to_string()),
            destination_url: None,
            visibility: Visibility::Visible,
        };
        let value = serde_json::to_value(&hero).unwrap();
        assert!(value["image"].is_null());
        assert_eq!(value["visibility"], "VISIBLE");
    }
}
