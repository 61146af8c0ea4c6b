//! Paginated collections table.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};

use merchdesk_core::format::{capitalize_first_letter, format_date};
use merchdesk_core::{CampaignStatus, CollectionVisibility, PageCursor, paginate};

use super::Chip;
use crate::models::Collection;

/// One table row, reduced to display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionRow {
    pub id: String,
    pub index: u32,
    pub status: CampaignStatus,
    pub start_date: String,
    pub end_date: String,
    pub title: String,
    pub product_count: usize,
    pub type_label: String,
    pub visibility: Chip,
    /// Visibility the row's publish toggle switches to.
    pub toggled_visibility: &'static str,
}

impl CollectionRow {
    #[must_use]
    pub fn new(collection: &Collection, now: DateTime<Utc>) -> Self {
        let toggled = match collection.visibility {
            CollectionVisibility::Published => CollectionVisibility::Draft,
            CollectionVisibility::Draft => CollectionVisibility::Published,
        };

        Self {
            id: collection.id.to_string(),
            index: collection.index,
            status: collection.campaign_status(now),
            start_date: format_date(&collection.campaign_duration.start_date),
            end_date: format_date(&collection.campaign_duration.end_date),
            title: collection.title.clone(),
            product_count: collection.products.len(),
            type_label: capitalize_first_letter(
                &collection.collection_type.as_str().to_lowercase(),
            ),
            visibility: Chip::new(collection.visibility.as_str()),
            toggled_visibility: toggled.as_str(),
        }
    }

    /// CSS class for the campaign status cell.
    #[must_use]
    pub fn status_class(&self) -> String {
        format!("status-{}", self.status.label().to_lowercase())
    }
}

/// The collections table on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionTable {
    pub rows: Vec<CollectionRow>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Text shown in the jump-to-page field.
    pub jump_value: String,
    /// Why the last jump request was rejected, if it was.
    pub jump_error: Option<String>,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
    pub last_page: usize,
}

impl CollectionTable {
    /// Build the table for `page`, applying a jump request first if present.
    ///
    /// A rejected jump keeps `page` and records the reason.
    #[must_use]
    pub fn new(
        collections: &[Collection],
        page: usize,
        jump: Option<&str>,
        per_page: NonZeroUsize,
        now: DateTime<Utc>,
    ) -> Self {
        let total_pages = paginate(collections, 1, per_page).total_pages;
        let mut cursor = PageCursor::at(page);

        let mut jump_error = None;
        if let Some(jump) = jump {
            cursor.set_jump_value(jump);
            if let Err(e) = cursor.jump(total_pages) {
                tracing::debug!(error = %e, "Rejected page jump");
                jump_error = Some(e.to_string());
            }
        }

        let page = paginate(collections, cursor.current_page(), per_page);
        let rows = page
            .items
            .iter()
            .map(|collection| CollectionRow::new(collection, now))
            .collect();

        let previous_page = cursor.has_previous().then(|| {
            let mut previous = cursor.clone();
            previous.previous();
            previous.current_page()
        });
        let next_page = cursor.has_next(total_pages).then(|| {
            let mut next = cursor.clone();
            next.next(total_pages);
            next.current_page()
        });
        let mut last = cursor.clone();
        last.jump_to_last(total_pages);

        Self {
            rows,
            current_page: cursor.current_page(),
            total_pages,
            jump_value: cursor.jump_value().to_string(),
            jump_error,
            previous_page,
            next_page,
            last_page: last.current_page(),
        }
    }
}
