//! # ethiocal
//!
//! Conversion between the Ethiopian and Gregorian calendars, Ethiopian date
//! arithmetic, and Amharic/English formatting.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates and adds [`FluentDate`], a chained-call
//! wrapper over the same operations.
//!
//! ## Quick start
//!
//! ```rust
//! use ethiocal::time::{to_ethiopian, GregorianDate};
//! use ethiocal::{FluentDate, Locale};
//!
//! let g = GregorianDate::from_ymd(2025, 7, 17).unwrap();
//! let e = to_ethiopian(g);
//! assert_eq!(e.to_string(), "2017-11-10");
//!
//! let label = FluentDate::from_gregorian(g)
//!     .unwrap()
//!     .with_locale(Locale::English)
//!     .add_days(1)
//!     .unwrap()
//!     .format("dddd MMMM D, YYYY E");
//! assert_eq!(label, "Friday July 11, 2017 E.C.");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, settings, and error definitions.
pub use ec_core as core;

/// Date types, conversion, and arithmetic.
pub use ec_time as time;

/// Names and pattern formatting.
pub use ec_format as format;

/// Chained-call wrapper.
pub mod fluent;

pub use ec_core::{Error, Locale, Result, Settings};
pub use ec_time::{EthiopianDate, GregorianDate, Weekday};
pub use fluent::FluentDate;
