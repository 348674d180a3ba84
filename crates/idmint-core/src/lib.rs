//! Core contracts and reference data for idmint.
//!
//! This crate defines the selector enums, the shared error type, and the
//! read-only lookup tables (ISBN groups, IMEI type allocation codes, locale
//! tags, file extensions, MIME types) consumed by the generators.

pub mod data;
pub mod error;
pub mod selectors;

pub use error::{Error, Result};
pub use selectors::{EanFormat, FileType, IsbnFormat, MimeType};

/// Locale used when a caller does not name one.
pub const DEFAULT_LOCALE: &str = "en";
