//! # ec-time
//!
//! Ethiopian and Gregorian date types, calendar conversion, and date
//! arithmetic.
//!
//! Both calendars are reduced to a linear day number; conversion shifts that
//! number by a fixed epoch offset, and day arithmetic happens on it directly.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Current-date entry point.
pub mod clock;

/// Ethiopian ⇄ Gregorian conversion.
pub mod convert;

/// `EthiopianDate` type.
pub mod ethiopian;

/// `GregorianDate` type.
pub mod gregorian;

/// Leap-year predicates.
pub mod leap;

/// `EthiopianMonth` and `GregorianMonth`.
pub mod month;

/// Units for `EthiopianDate::advance`.
pub mod time_unit;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use convert::{
    month_start_weekday, to_ethiopian, to_ethiopian_from_parts, to_gregorian,
    to_gregorian_from_parts, EPOCH_OFFSET,
};
pub use ethiopian::{compare, is_valid, month_length, EthiopianDate};
pub use gregorian::{day_number_lenient, GregorianDate};
pub use leap::{is_leap_year_ethiopian, is_leap_year_gregorian};
pub use month::{EthiopianMonth, GregorianMonth};
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
