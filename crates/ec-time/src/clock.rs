//! The single entry point that observes the current date.
//!
//! Everything else in the crate is a pure function of its arguments. "Today"
//! is either the evaluation date pinned in [`Settings`] or the UTC wall
//! clock, read once per call.

use chrono::{DateTime, Utc};
use ec_core::errors::Result;
use ec_core::Settings;
use tracing::debug;

use crate::convert::to_ethiopian;
use crate::ethiopian::EthiopianDate;
use crate::gregorian::GregorianDate;

/// The Gregorian calendar day of a UTC moment.
pub fn from_moment(moment: DateTime<Utc>) -> GregorianDate {
    GregorianDate::from(moment.date_naive())
}

/// Today's Gregorian date under `settings`.
///
/// # Errors
/// Returns an error only if a pinned evaluation day lies outside the
/// representable Gregorian range.
pub fn today(settings: &Settings) -> Result<GregorianDate> {
    match settings.evaluation_day() {
        Some(day) => {
            debug!(day_number = day, "using pinned evaluation date");
            GregorianDate::from_day_number(day)
        }
        None => {
            let now = Utc::now();
            debug!(%now, "reading wall clock");
            Ok(from_moment(now))
        }
    }
}

/// Today's Ethiopian date under `settings`.
pub fn today_ethiopian(settings: &Settings) -> Result<EthiopianDate> {
    today(settings).map(to_ethiopian)
}
