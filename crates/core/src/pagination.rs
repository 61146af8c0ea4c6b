//! Page slicing and page-cursor navigation.
//!
//! [`paginate`] is pure arithmetic over an ordered slice. [`PageCursor`] holds
//! the 1-based current page together with the raw text of the jump-to-page
//! field, and applies previous/next/jump navigation against a page count.

use std::num::NonZeroUsize;

use serde::Serialize;
use thiserror::Error;

/// One page of an ordered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// Items on the requested page (empty when the page is out of range).
    pub items: &'a [T],
    /// Total number of pages, `ceil(len / per_page)`.
    pub total_pages: usize,
}

/// Slice `items` into the 1-based `current_page` of `per_page` items.
///
/// Computes the half-open range `[(page - 1) * per_page, page * per_page)`
/// clamped to the slice. The page is not range-checked: page 0 and pages
/// past the end yield an empty slice.
#[must_use]
pub fn paginate<T>(items: &[T], current_page: usize, per_page: NonZeroUsize) -> Page<'_, T> {
    let per_page = per_page.get();
    let total_pages = items.len().div_ceil(per_page);

    let page_items = current_page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(per_page))
        .and_then(|start| {
            let end = start.saturating_add(per_page).min(items.len());
            items.get(start..end)
        })
        .unwrap_or_default();

    Page {
        items: page_items,
        total_pages,
    }
}

/// Reasons a jump-to-page request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JumpError {
    /// The jump field does not hold a base-10 integer.
    #[error("'{0}' is not a page number")]
    NotANumber(String),
    /// The page number is outside `1..=total_pages`.
    #[error("page {page} is out of range (1-{total_pages})")]
    OutOfRange { page: i64, total_pages: usize },
}

/// Navigation state for a paginated table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageCursor {
    current_page: usize,
    jump_value: String,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    /// A cursor on page 1.
    #[must_use]
    pub fn new() -> Self {
        Self::at(1)
    }

    /// A cursor on `page` (at least 1), with the jump field showing it.
    #[must_use]
    pub fn at(page: usize) -> Self {
        let current_page = page.max(1);
        Self {
            current_page,
            jump_value: current_page.to_string(),
        }
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Raw text of the jump-to-page field.
    #[must_use]
    pub fn jump_value(&self) -> &str {
        &self.jump_value
    }

    /// Replace the jump field text without navigating.
    pub fn set_jump_value(&mut self, value: impl Into<String>) {
        self.jump_value = value.into();
    }

    /// Go back one page, stopping at page 1.
    pub fn previous(&mut self) {
        self.move_to(self.current_page.saturating_sub(1).max(1));
    }

    /// Go forward one page, stopping at the last page.
    pub fn next(&mut self, total_pages: usize) {
        self.move_to(self.current_page.saturating_add(1).min(total_pages).max(1));
    }

    /// Go to the last page.
    pub fn jump_to_last(&mut self, total_pages: usize) {
        self.move_to(total_pages.max(1));
    }

    /// Go to the page typed into the jump field.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if the field is not an integer or is outside
    /// `1..=total_pages`; the current page is left unchanged.
    pub fn jump(&mut self, total_pages: usize) -> Result<usize, JumpError> {
        let text = self.jump_value.trim();
        let page = text
            .parse::<i64>()
            .map_err(|_| JumpError::NotANumber(text.to_string()))?;

        let in_range = usize::try_from(page)
            .ok()
            .filter(|&page| (1..=total_pages).contains(&page));

        match in_range {
            Some(page) => {
                self.current_page = page;
                Ok(page)
            }
            None => Err(JumpError::OutOfRange { page, total_pages }),
        }
    }

    /// Whether a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    #[must_use]
    pub const fn has_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }

    fn move_to(&mut self, page: usize) {
        self.current_page = page;
        self.jump_value = page.to_string();
    }
}
