//! `EthiopianDate`: the Ethiopian calendar value type and its arithmetic.
//!
//! The Ethiopian year has twelve 30-day months followed by Pagume, which has
//! 5 days (6 in a leap year). Leap years recur every fourth year with no
//! century exception, so four years always span exactly 1461 days and the
//! day number can be computed in closed form.
//!
//! # Day-number convention
//! * Day 0 = Meskerem 1 of year 0.
//! * Meskerem 1, 1 E.C. is day 365.

use std::cmp::Ordering;

use ec_core::errors::{Error, Result};
use ec_core::utilities::data_parsers::parse_date;
use ec_core::{ensure, DayNumber, Year, MAX_VALID_YEAR, MIN_VALID_YEAR};
use tracing::trace;

use crate::convert::EPOCH_OFFSET;
use crate::leap::is_leap_year_ethiopian;
use crate::month::EthiopianMonth;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;

const DAYS_PER_4_YEARS: DayNumber = 1_461;
const DAYS_PER_YEAR: DayNumber = 365;
const DAYS_PER_MONTH: DayNumber = 30;

/// An Ethiopian calendar date.
///
/// A plain `(year, month, day)` triple. Any triple can be held; use
/// [`is_valid`](EthiopianDate::is_valid) or [`EthiopianDate::new`] to check
/// one from outside. Every operation returns a new value. Ordering is
/// lexicographic on `(year, month, day)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EthiopianDate {
    /// Year (Amete Mihret era).
    pub year: Year,
    /// Month, 1 = Meskerem … 13 = Pagume.
    pub month: u8,
    /// Day of the month.
    pub day: u8,
}

impl EthiopianDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a validated date.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] naming the triple if it fails
    /// [`is_valid`](EthiopianDate::is_valid).
    pub fn new(year: Year, month: u8, day: u8) -> Result<Self> {
        let date = Self { year, month, day };
        date.require_valid()?;
        Ok(date)
    }

    /// Create a date from its day number without range checks beyond the
    /// year fitting in a [`Year`].
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if the year does not fit.
    pub fn from_day_number(n: DayNumber) -> Result<Self> {
        let (year, month, day) = decompose(n);
        Ok(Self {
            year: checked_year(year)?,
            month,
            day,
        })
    }

    /// Create a date from a day number known to map to a year that fits.
    pub(crate) fn from_day_number_unchecked(n: DayNumber) -> Self {
        let (year, month, day) = decompose(n);
        debug_assert!(Year::try_from(year).is_ok(), "Ethiopian year {year} overflows");
        Self {
            year: year as Year,
            month,
            day,
        }
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    /// Return the day number (Meskerem 1 of year 0 = 0).
    ///
    /// Computed from the raw triple, so an overflowing day spills into the
    /// following month.
    pub fn day_number(&self) -> DayNumber {
        let year = DayNumber::from(self.year);
        year.div_euclid(4) * DAYS_PER_4_YEARS
            + year.rem_euclid(4) * DAYS_PER_YEAR
            + (DayNumber::from(self.month) - 1) * DAYS_PER_MONTH
            + DayNumber::from(self.day)
            - 1
    }

    /// Return `true` if this triple is acceptable external input: year in
    /// `[1000, 3000]`, month in `[1, 13]`, and day within the month.
    pub fn is_valid(&self) -> bool {
        (MIN_VALID_YEAR..=MAX_VALID_YEAR).contains(&self.year)
            && (1..=13).contains(&self.month)
            && self.day >= 1
            && self.day <= month_length(self.month, self.year)
    }

    fn require_valid(&self) -> Result<()> {
        ensure!(
            self.is_valid(),
            "{self:?} is not a valid Ethiopian date"
        );
        Ok(())
    }

    /// Return `true` if the year carries Pagume 6.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year_ethiopian(self.year)
    }

    /// Number of days in this date's month.
    pub fn month_length(&self) -> u8 {
        month_length(self.month, self.year)
    }

    /// Return the month as an enum, or `None` for a month outside 1–13.
    pub fn ethiopian_month(&self) -> Option<EthiopianMonth> {
        EthiopianMonth::from_number(self.month)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        u16::from(self.month.saturating_sub(1)) * 30 + u16::from(self.day)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Shift onto the Gregorian day numbering, where day 0 is a Sunday.
        let gregorian = self.day_number() + EPOCH_OFFSET;
        Weekday::from_sunday_based(gregorian.rem_euclid(7) as u8)
    }

    /// Return the last day of this date's month.
    pub fn end_of_month(self) -> Self {
        Self {
            day: self.month_length(),
            ..self
        }
    }

    /// Return the number of days from `self` to `other` (positive if
    /// `other` is later).
    pub fn days_between(self, other: EthiopianDate) -> DayNumber {
        other.day_number() - self.day_number()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.
    ///
    /// # Errors
    /// [`Error::InvalidInput`] if `self` is not valid; [`Error::OutOfRange`]
    /// if the result's year does not fit.
    pub fn add_days(self, n: DayNumber) -> Result<Self> {
        self.require_valid()?;
        let target = self
            .day_number()
            .checked_add(n)
            .ok_or_else(|| Error::OutOfRange(format!("{self} plus {n} days")))?;
        Self::from_day_number(target)
    }

    /// Advance by `n` months, counting Pagume as a month.
    ///
    /// The day is clamped to the length of the target month, so
    /// Nehase 30 plus one month is the last day of Pagume.
    pub fn add_months(self, n: i64) -> Result<Self> {
        self.require_valid()?;
        let index = DayNumber::from(self.year) * 13 + DayNumber::from(self.month) - 1;
        let target = index
            .checked_add(n)
            .ok_or_else(|| Error::OutOfRange(format!("{self} plus {n} months")))?;
        let year = checked_year(target.div_euclid(13))?;
        let month = (target.rem_euclid(13) + 1) as u8;
        let day = self.day.min(month_length(month, year));
        Ok(Self { year, month, day })
    }

    /// Advance by `n` years.
    ///
    /// Pagume 6 becomes Pagume 5 when the target year is not a leap year.
    pub fn add_years(self, n: i32) -> Result<Self> {
        self.require_valid()?;
        let year = self
            .year
            .checked_add(n)
            .ok_or_else(|| Error::OutOfRange(format!("{self} plus {n} years")))?;
        let mut day = self.day;
        if self.month == 13 && day == 6 && !is_leap_year_ethiopian(year) {
            trace!(from = %self, year, "clamping Pagume 6 to Pagume 5");
            day = 5;
        }
        Ok(Self { year, day, ..self })
    }

    /// Advance by a period expressed in the given time unit.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n.into()),
            TimeUnit::Weeks => self.add_days(DayNumber::from(n) * 7),
            TimeUnit::Months => self.add_months(n.into()),
            TimeUnit::Years => self.add_years(n),
        }
    }
}

// ── Free functions ────────────────────────────────────────────────────────────

/// Number of days in an Ethiopian month.
///
/// 30 for months 1–12; Pagume (13) has 6 days in a leap year and 5 otherwise.
/// Months outside 1–13 have no days.
pub fn month_length(month: u8, year: Year) -> u8 {
    match month {
        1..=12 => 30,
        13 if is_leap_year_ethiopian(year) => 6,
        13 => 5,
        _ => 0,
    }
}

/// Return `true` if `date` is acceptable external input.
pub fn is_valid(date: &EthiopianDate) -> bool {
    date.is_valid()
}

/// Compare two dates on `(year, month, day)`.
///
/// `compare(a, b) as i8` yields −1, 0, or 1.
pub fn compare(a: &EthiopianDate, b: &EthiopianDate) -> Ordering {
    (a.year, a.month, a.day).cmp(&(b.year, b.month, b.day))
}

/// Split a day number into `(year, month, day)`.
fn decompose(n: DayNumber) -> (DayNumber, u8, u8) {
    let cycles = n.div_euclid(DAYS_PER_4_YEARS);
    let rem = n.rem_euclid(DAYS_PER_4_YEARS);
    // The last day of the cycle is Pagume 6 of its leap (fourth) year;
    // it does not fit the 30-day month layout below.
    if rem == DAYS_PER_4_YEARS - 1 {
        return (cycles * 4 + 3, 13, 6);
    }
    let years_in_cycle = rem / DAYS_PER_YEAR;
    let day_in_year = rem % DAYS_PER_YEAR;
    (
        cycles * 4 + years_in_cycle,
        (day_in_year / DAYS_PER_MONTH + 1) as u8,
        (day_in_year % DAYS_PER_MONTH + 1) as u8,
    )
}

fn checked_year(year: DayNumber) -> Result<Year> {
    Year::try_from(year)
        .map_err(|_| Error::OutOfRange(format!("Ethiopian year {year} out of range")))
}

// ── Parsing ───────────────────────────────────────────────────────────────────

impl std::str::FromStr for EthiopianDate {
    type Err = Error;

    /// Parse `YYYY-MM-DD` or `DD/MM/YYYY` into a valid date.
    fn from_str(s: &str) -> Result<Self> {
        let (year, month, day) = parse_date(s)?;
        let date = Self { year, month, day };
        ensure!(date.is_valid(), "{s:?} is not a valid Ethiopian date");
        Ok(date)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EthiopianDate({self})")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
