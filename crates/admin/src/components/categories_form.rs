//! Categories panel.

use std::collections::HashMap;

use merchdesk_core::{CategoryId, Visibility};

use crate::actions::{CategoriesUpdate, CategoryVisibility};
use crate::models::{Category, CategorySection};

/// Form field carrying the section toggle.
pub const SECTION_FIELD: &str = "section_visible";
/// Prefix of the per-category checkbox fields (`category.<id>`).
pub const CATEGORY_FIELD_PREFIX: &str = "category.";

/// One category row with its checkbox state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryToggle {
    pub id: CategoryId,
    pub name: String,
    pub visible: bool,
}

impl CategoryToggle {
    /// Name of this row's checkbox.
    #[must_use]
    pub fn field_name(&self) -> String {
        format!("{CATEGORY_FIELD_PREFIX}{}", self.id)
    }
}

/// Draft state of the categories panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoriesForm {
    pub section_visibility: Visibility,
    pub categories: Vec<CategoryToggle>,
}

impl CategoriesForm {
    #[must_use]
    pub fn new(section: CategorySection, categories: &[Category]) -> Self {
        Self {
            section_visibility: section.visibility,
            categories: categories
                .iter()
                .map(|category| CategoryToggle {
                    id: category.id.clone(),
                    name: category.display_name(),
                    visible: category.visibility.is_visible(),
                })
                .collect(),
        }
    }

    pub fn toggle_section(&mut self) {
        self.section_visibility = self.section_visibility.toggled();
    }

    /// Flip the category at `index`; out-of-range indexes are ignored.
    pub fn toggle_category(&mut self, index: usize) {
        if let Some(category) = self.categories.get_mut(index) {
            category.visible = !category.visible;
        }
    }

    /// Apply a submitted HTML form.
    ///
    /// Unchecked checkboxes are absent from the submission, so every field
    /// not present reads as hidden.
    pub fn apply_submission(&mut self, fields: &HashMap<String, String>) {
        self.section_visibility = Visibility::from_flag(fields.contains_key(SECTION_FIELD));
        for category in &mut self.categories {
            category.visible = fields.contains_key(&category.field_name());
        }
    }

    /// The request for the update-categories action.
    #[must_use]
    pub fn to_update(&self) -> CategoriesUpdate {
        CategoriesUpdate {
            section_visibility: self.section_visibility,
            categories: self
                .categories
                .iter()
                .map(|category| CategoryVisibility {
                    id: category.id.clone(),
                    visibility: Visibility::from_flag(category.visible),
                })
                .collect(),
        }
    }
}
