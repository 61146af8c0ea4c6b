//! Merchdesk Core - Shared types and pure merchandising logic.
//!
//! This crate holds the side-effect-free pieces of Merchdesk. It is used by:
//! - `admin` - Storefront merchandising admin (HTML pages + JSON API)
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. This keeps it lightweight and trivially testable.
//!
//! # Modules
//!
//! - [`types`] - Newtype document IDs and status enums
//! - [`campaign`] - Campaign status derivation from a date range
//! - [`pagination`] - Page slicing and page-cursor navigation
//! - [`format`] - Date/string formatting, image URL checks, status codes
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use merchdesk_core::paginate;
//!
//! let per_page = NonZeroUsize::new(2).unwrap();
//! let page = paginate(&[1, 2, 3], 2, per_page);
//! assert_eq!(page.items, &[3]);
//! assert_eq!(page.total_pages, 2);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod campaign;
pub mod format;
pub mod pagination;
pub mod types;

pub use campaign::{CampaignDuration, campaign_status, parse_campaign_date};
pub use format::{ActionResponse, ResponseFlag, StatusCode};
pub use pagination::{JumpError, Page, PageCursor, paginate};
pub use types::*;
