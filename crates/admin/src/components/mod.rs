//! View models for the admin pages.
//!
//! Each component holds the state a page needs to render one panel, already
//! reduced to display strings so templates stay free of logic.

pub mod alert;
pub mod categories_form;
pub mod chip;
pub mod collection_table;
pub mod page_hero_form;

pub use alert::{Alert, AlertTone, redirect_with_alert};
pub use categories_form::{CategoriesForm, CategoryToggle};
pub use chip::Chip;
pub use collection_table::{CollectionRow, CollectionTable};
pub use page_hero_form::PageHeroForm;
