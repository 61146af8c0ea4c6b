//! Update actions behind the editing panels.
//!
//! Every action swallows its error: the failure is logged, captured to
//! Sentry and reduced to a fixed message for the alert. Cached pages are
//! revalidated only after a successful write.

mod categories;
mod collections;
mod page_hero;
mod products;

use std::fmt;

use merchdesk_core::{ActionResponse, StatusCode};

pub use categories::{CategoriesUpdate, CategoryVisibility, update_categories};
pub use collections::update_collection;
pub use page_hero::update_page_hero;
pub use products::update_product;

/// Result of an update action: a message for the user and whether it
/// describes a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    succeeded: bool,
    message: &'static str,
}

impl Outcome {
    pub(crate) const fn success(message: &'static str) -> Self {
        Self {
            succeeded: true,
            message,
        }
    }

    pub(crate) const fn failure(message: &'static str) -> Self {
        Self {
            succeeded: false,
            message,
        }
    }

    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.succeeded
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.message
    }

    /// JSON envelope for API clients.
    #[must_use]
    pub fn to_response(&self) -> ActionResponse {
        let code = if self.succeeded {
            StatusCode::SUCCESS.code
        } else {
            StatusCode::INTERNAL_SERVER_ERROR.code
        };
        ActionResponse::new(code, self.message)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.message.to_string()
    }
}

/// Log a failed action and report it to Sentry.
fn report_failure(action: &str, error: &(dyn std::error::Error + 'static)) {
    let event_id = sentry::capture_error(error);
    tracing::error!(
        action,
        error = %error,
        sentry_event_id = %event_id,
        "Update action failed"
    );
}
