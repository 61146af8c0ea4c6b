//! Domain models for merchandising documents.
//!
//! These are typed views over loosely-typed stored documents. Missing
//! optional fields default instead of failing, since documents are written
//! by more than one tool.

pub mod category;
pub mod collection;
pub mod page_hero;
pub mod product;

pub use category::{CATEGORY_SECTION_ID, Category, CategorySection};
pub use collection::{Collection, CollectionProduct};
pub use page_hero::PageHero;
pub use product::{Product, ProductColor, ProductUpdate};
