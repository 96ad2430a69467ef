//! # ec-format
//!
//! Locale-aware names and pattern formatting for Ethiopian dates.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Month, weekday, and era name tables.
pub mod names;

/// `format` and its pattern tokens.
pub mod pattern;

pub use names::{day_name, era_suffix, month_name, month_names};
pub use pattern::{format, DEFAULT_PATTERN};
