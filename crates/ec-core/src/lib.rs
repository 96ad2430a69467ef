//! # ec-core
//!
//! Core types, settings, and error definitions for ethiocal.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – type aliases, the error type, the
//! supported [`Locale`]s, and the explicit [`Settings`] value.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error type and the `ensure!` / `malformed!` macros.
pub mod errors;

/// Rendering locales.
pub mod locale;

/// Engine settings (evaluation date, default locale).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Signed count of days since a calendar-specific epoch.
pub type DayNumber = i64;

/// Calendar year (either calendar).
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use locale::Locale;
pub use settings::{Settings, MAX_VALID_YEAR, MIN_VALID_YEAR};
