//! Core types for Merchdesk.
//!
//! This module provides type-safe wrappers for document identifiers and the
//! status values stored on merchandising documents.

pub mod id;
pub mod status;

pub use id::*;
pub use status::*;
