//! `GregorianDate` and the Gregorian day-number arithmetic.
//!
//! # Day-number convention
//! * Day 1 = 0001-01-01 (proleptic Gregorian, a Monday).
//! * Day 0 = 0000-12-31; earlier days are negative.
//!
//! The inverse mapping decomposes a day number through 400-, 100-, 4- and
//! 1-year blocks. Whenever a block divides the day number exactly, the result
//! is 31 December of the last whole year consumed, never 1 January of the
//! next one.

use chrono::Datelike;
use ec_core::errors::{Error, Result};
use ec_core::utilities::data_parsers::parse_iso_date;
use ec_core::{DayNumber, Year};
use tracing::warn;

use crate::leap::is_leap_year_gregorian;
use crate::month::GregorianMonth;
use crate::weekday::Weekday;

const DAYS_PER_400_YEARS: DayNumber = 146_097;
const DAYS_PER_100_YEARS: DayNumber = 36_524;
const DAYS_PER_4_YEARS: DayNumber = 1_461;
const DAYS_PER_YEAR: DayNumber = 365;

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// A whole-day date in the proleptic Gregorian calendar.
///
/// Always holds a real calendar date; ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GregorianDate {
    year: Year,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Smallest representable year.
    pub const MIN_YEAR: Year = -999_999;

    /// Largest representable year.
    pub const MAX_YEAR: Year = 999_999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns [`Error::MalformedArgument`] if the triple does not name a
    /// Gregorian date in `MIN_YEAR..=MAX_YEAR`.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::MalformedArgument(format!(
                "Gregorian year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::MalformedArgument(format!(
                "Gregorian month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::MalformedArgument(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Create a date from its day number (0001-01-01 = 1).
    ///
    /// # Errors
    /// Returns [`Error::OutOfRange`] if the year falls outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn from_day_number(n: DayNumber) -> Result<Self> {
        let mut year = n.div_euclid(DAYS_PER_400_YEARS) * 400;
        let mut rem = n.rem_euclid(DAYS_PER_400_YEARS);
        if rem == 0 {
            return Self::last_day_of(year);
        }

        // The fourth century of a 400-year block carries the extra leap day.
        let centuries = (rem / DAYS_PER_100_YEARS).min(3);
        rem -= centuries * DAYS_PER_100_YEARS;
        year += centuries * 100;
        if rem == 0 {
            return Self::last_day_of(year);
        }

        let quads = rem / DAYS_PER_4_YEARS;
        rem %= DAYS_PER_4_YEARS;
        year += quads * 4;
        if rem == 0 {
            return Self::last_day_of(year);
        }

        // Likewise the fourth year of a 4-year block is the 366-day one.
        let years = (rem / DAYS_PER_YEAR).min(3);
        rem -= years * DAYS_PER_YEAR;
        year += years;
        if rem == 0 {
            return Self::last_day_of(year);
        }

        let year = checked_year(year + 1)?;
        let mut month = 1u8;
        loop {
            let days = DayNumber::from(days_in_month(year, month));
            if rem <= days {
                break;
            }
            rem -= days;
            month += 1;
        }
        Ok(Self {
            year,
            month,
            day: rem as u8,
        })
    }

    fn last_day_of(year: DayNumber) -> Result<Self> {
        Ok(Self {
            year: checked_year(year)?,
            month: 12,
            day: 31,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as an enum.
    pub fn gregorian_month(&self) -> GregorianMonth {
        GregorianMonth::ALL[usize::from(self.month) - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let leap = u16::from(self.month > 2 && is_leap_year_gregorian(self.year));
        MONTH_OFFSET[usize::from(self.month) - 1] + leap + u16::from(self.day)
    }

    /// Return the day number (0001-01-01 = 1).
    pub fn day_number(&self) -> DayNumber {
        let prior = DayNumber::from(self.year) - 1;
        let whole_years = prior * DAYS_PER_YEAR + prior.div_euclid(4) - prior.div_euclid(100)
            + prior.div_euclid(400);
        whole_years + DayNumber::from(self.day_of_year())
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Day 0 (0000-12-31) is a Sunday.
        Weekday::from_sunday_based(self.day_number().rem_euclid(7) as u8)
    }

    /// Return `true` if this date lies in a Gregorian leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year_gregorian(self.year)
    }
}

// ── Soft-failure day number ──────────────────────────────────────────────────

/// Day number of a raw `(year, month, day)` triple, or `0` if it is not a date.
///
/// Meant for display code that prefers a placeholder over an error: the
/// failure is logged at `warn` level and the sentinel `0` (0000-12-31) is
/// returned. Use [`GregorianDate::from_ymd`] for strict validation.
pub fn day_number_lenient(year: i64, month: i64, day: i64) -> DayNumber {
    let date = match (
        Year::try_from(year),
        u8::try_from(month),
        u8::try_from(day),
    ) {
        (Ok(y), Ok(m), Ok(d)) => GregorianDate::from_ymd(y, m, d),
        _ => Err(Error::MalformedArgument(format!(
            "({year}, {month}, {day}) is not a numeric date triple"
        ))),
    };
    match date {
        Ok(date) => date.day_number(),
        Err(err) => {
            warn!(year, month, day, error = %err, "not a Gregorian date; using day number 0");
            0
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────────────────

impl From<chrono::NaiveDate> for GregorianDate {
    fn from(date: chrono::NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl TryFrom<GregorianDate> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(date: GregorianDate) -> Result<Self> {
        chrono::NaiveDate::from_ymd_opt(date.year, date.month.into(), date.day.into())
            .ok_or_else(|| Error::OutOfRange(format!("{date} is outside chrono's range")))
    }
}

impl std::str::FromStr for GregorianDate {
    type Err = Error;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)?;
        Self::from_ymd(y, m, d)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GregorianDate({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Number of days in a given Gregorian month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year_gregorian(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn checked_year(year: DayNumber) -> Result<Year> {
    Year::try_from(year)
        .ok()
        .filter(|y| (GregorianDate::MIN_YEAR..=GregorianDate::MAX_YEAR).contains(y))
        .ok_or_else(|| Error::OutOfRange(format!("Gregorian year {year} out of range")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
