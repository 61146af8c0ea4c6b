//! Storefront categories and the categories section toggle.

use serde::{Deserialize, Serialize};

use merchdesk_core::{CategoryId, Visibility};

/// Document id of the categories section inside `page_sections`.
pub const CATEGORY_SECTION_ID: &str = "categories";

/// A product category shown on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl Category {
    /// Name for display, falling back to the index.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Category {}", self.index))
    }
}

/// Whether the categories section is shown on the storefront at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategorySection {
    #[serde(default)]
    pub visibility: Visibility,
}
