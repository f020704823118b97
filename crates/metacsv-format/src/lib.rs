//! Locale-aware text conventions used by MetaCSV typed columns.
//!
//! This crate provides three layers:
//! - [`locale`] month/weekday names and AM/PM markers keyed by locale id
//!   (`fr_FR`, `de-DE`, `en`, ...).
//! - [`number`] helpers that validate and normalize numbers written with explicit thousands and
//!   decimal separators, and the inverse grouping used when writing them back.
//! - [`DatePattern`], a compiled LDML/Java-style date pattern (`yyyy-MM-dd'T'HH:mm:ss`,
//!   `d MMMM yyyy`, ...) that can both format and parse naive date-times.

#![forbid(unsafe_code)]

pub mod locale;
pub mod number;

mod datetime;

pub use crate::datetime::{DateParseError, DatePattern, PatternError, PatternField};
pub use locale::{get_locale, DateLocale, EN_US};
