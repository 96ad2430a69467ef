//! Conversion between the Ethiopian and Gregorian calendars.
//!
//! Both calendars count days from their own epoch; the two counts differ by
//! the constant [`EPOCH_OFFSET`]. A conversion maps the source date to its day
//! number, shifts it, and maps the result back into the target calendar, so
//! the two directions are exact inverses.

use ec_core::errors::{Error, Result};
use ec_core::{ensure, malformed, DayNumber, Year};

use crate::ethiopian::EthiopianDate;
use crate::gregorian::GregorianDate;
use crate::weekday::Weekday;

/// Gregorian day number minus Ethiopian day number for the same day.
pub const EPOCH_OFFSET: DayNumber = 2_431;

/// Convert a Gregorian date to the Ethiopian calendar.
pub fn to_ethiopian(date: GregorianDate) -> EthiopianDate {
    // Gregorian years are bounded well inside the Ethiopian year type.
    EthiopianDate::from_day_number_unchecked(date.day_number() - EPOCH_OFFSET)
}

/// Convert an Ethiopian date to the Gregorian calendar.
///
/// The triple is not validated: a day past the end of its month carries into
/// the following month, as in [`EthiopianDate::day_number`].
///
/// # Errors
/// Returns [`Error::OutOfRange`] if the Gregorian year leaves
/// [`GregorianDate::MIN_YEAR`]`..=`[`GregorianDate::MAX_YEAR`].
pub fn to_gregorian(date: EthiopianDate) -> Result<GregorianDate> {
    GregorianDate::from_day_number(date.day_number() + EPOCH_OFFSET)
}

/// Weekday of the first day of an Ethiopian month.
///
/// # Errors
/// Returns [`Error::InvalidInput`] if `month` is outside 1–13.
pub fn month_start_weekday(month: u8, year: Year) -> Result<Weekday> {
    ensure!(
        (1..=13).contains(&month),
        "month {month} out of range [1, 13]"
    );
    let first = EthiopianDate { year, month, day: 1 };
    Ok(to_gregorian(first)?.weekday())
}

/// Convert a loosely-shaped Gregorian `[year, month, day]` to Ethiopian.
///
/// # Errors
/// Returns [`Error::MalformedArgument`] unless `parts` is a three-element
/// triple naming a real Gregorian date.
pub fn to_ethiopian_from_parts(parts: &[i64]) -> Result<EthiopianDate> {
    let (year, month, day) = triple(parts)?;
    Ok(to_ethiopian(GregorianDate::from_ymd(year, month, day)?))
}

/// Convert a loosely-shaped Ethiopian `[year, month, day]` to Gregorian.
///
/// # Errors
/// Returns [`Error::MalformedArgument`] unless `parts` is a three-element
/// numeric triple, and [`Error::InvalidInput`] if the triple is not a valid
/// Ethiopian date.
pub fn to_gregorian_from_parts(parts: &[i64]) -> Result<GregorianDate> {
    let (year, month, day) = triple(parts)?;
    to_gregorian(EthiopianDate::new(year, month, day)?)
}

fn triple(parts: &[i64]) -> Result<(Year, u8, u8)> {
    let [year, month, day] = parts else {
        malformed!(
            "expected a [year, month, day] triple, got {} component(s): {parts:?}",
            parts.len()
        );
    };
    let narrow = || Error::MalformedArgument(format!("components out of range: {parts:?}"));
    Ok((
        Year::try_from(*year).map_err(|_| narrow())?,
        u8::try_from(*month).map_err(|_| narrow())?,
        u8::try_from(*day).map_err(|_| narrow())?,
    ))
}
