//! `FluentDate`: a chained-call wrapper around the calendar engine.
//!
//! Each method delegates to the free functions in [`ec_time`] and
//! [`ec_format`] and returns a new value; nothing here adds calendar logic.

use std::cmp::Ordering;

use ec_core::errors::Result;
use ec_core::{DayNumber, Locale, Settings};
use ec_format::DEFAULT_PATTERN;
use ec_time::clock;
use ec_time::{
    compare, to_ethiopian, to_gregorian, EthiopianDate, GregorianDate, TimeUnit, Weekday,
};

/// An Ethiopian date paired with the locale used to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FluentDate {
    date: EthiopianDate,
    locale: Locale,
}

impl FluentDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Wrap a date after validating it.
    ///
    /// # Errors
    /// Returns [`ec_core::Error::InvalidInput`] if `date` is not valid.
    pub fn new(date: EthiopianDate) -> Result<Self> {
        let date = EthiopianDate::new(date.year, date.month, date.day)?;
        Ok(Self {
            date,
            locale: Locale::default(),
        })
    }

    /// Wrap the Ethiopian equivalent of a Gregorian date.
    ///
    /// # Errors
    /// Returns [`ec_core::Error::InvalidInput`] if the converted date falls
    /// outside the valid Ethiopian year range.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self> {
        Self::new(to_ethiopian(date))
    }

    /// Today under `settings`, rendered in its locale.
    pub fn today(settings: &Settings) -> Result<Self> {
        let today = Self::new(clock::today_ethiopian(settings)?)?;
        Ok(today.with_locale(settings.locale()))
    }

    /// Parse `YYYY-MM-DD` or `DD/MM/YYYY`.
    pub fn parse(s: &str) -> Result<Self> {
        Self::new(s.parse()?)
    }

    // ── Chaining ──────────────────────────────────────────────────────────────

    /// Render in `locale` from now on.
    pub fn with_locale(self, locale: Locale) -> Self {
        Self { locale, ..self }
    }

    /// See [`EthiopianDate::add_days`].
    pub fn add_days(self, n: DayNumber) -> Result<Self> {
        self.map(|d| d.add_days(n))
    }

    /// See [`EthiopianDate::add_months`].
    pub fn add_months(self, n: i64) -> Result<Self> {
        self.map(|d| d.add_months(n))
    }

    /// See [`EthiopianDate::add_years`].
    pub fn add_years(self, n: i32) -> Result<Self> {
        self.map(|d| d.add_years(n))
    }

    /// See [`EthiopianDate::advance`].
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        self.map(|d| d.advance(n, unit))
    }

    fn map(self, f: impl FnOnce(EthiopianDate) -> Result<EthiopianDate>) -> Result<Self> {
        Ok(Self {
            date: f(self.date)?,
            ..self
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// The wrapped date.
    pub fn date(&self) -> EthiopianDate {
        self.date
    }

    /// The rendering locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The Gregorian equivalent.
    pub fn to_gregorian(&self) -> Result<GregorianDate> {
        to_gregorian(self.date)
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Whether the year has a sixth Pagume day.
    pub fn is_leap_year(&self) -> bool {
        self.date.is_leap_year()
    }

    /// Days in the current month.
    pub fn month_length(&self) -> u8 {
        self.date.month_length()
    }

    /// Month name in the current locale.
    pub fn month_name(&self) -> &'static str {
        // Wrapped dates are always valid, so the month is in 1–13.
        ec_format::month_name(self.date.month, self.locale).unwrap_or_default()
    }

    /// Weekday name in the current locale.
    pub fn day_name(&self) -> &'static str {
        ec_format::day_name(self.weekday(), self.locale)
    }

    /// Render with `pattern` (see [`ec_format::pattern`]).
    pub fn format(&self, pattern: &str) -> String {
        ec_format::format(&self.date, pattern, self.locale)
    }

    /// Days from `self` to `other`.
    pub fn days_until(&self, other: &FluentDate) -> DayNumber {
        self.date.days_between(other.date)
    }
}

impl PartialOrd for FluentDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dates compare chronologically; the locale only breaks ties.
impl Ord for FluentDate {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.date, &other.date).then_with(|| {
            (self.locale as u8).cmp(&(other.locale as u8))
        })
    }
}

impl From<FluentDate> for EthiopianDate {
    fn from(f: FluentDate) -> Self {
        f.date
    }
}

impl std::fmt::Display for FluentDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(DEFAULT_PATTERN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hamle_10() -> FluentDate {
        FluentDate::parse("2017-11-10").unwrap()
    }

    #[test]
    fn chains_delegate_to_engine() {
        let d = hamle_10().add_days(30).unwrap().add_years(2).unwrap();
        assert_eq!(d.date(), EthiopianDate::new(2019, 12, 10).unwrap());
        let d = d.add_months(1).unwrap();
        assert_eq!(d.date(), EthiopianDate::new(2019, 13, 6).unwrap());
        assert_eq!(d.add_years(1).unwrap().date().day, 5);
    }

    #[test]
    fn value_is_immutable() {
        let start = hamle_10();
        let later = start.add_days(5).unwrap();
        assert_eq!(start.date(), EthiopianDate::new(2017, 11, 10).unwrap());
        assert_eq!(start.days_until(&later), 5);
        assert!(start < later);
    }

    #[test]
    fn rendering_follows_locale() {
        let d = hamle_10();
        assert_eq!(d.to_string(), "ሐምሌ 10 2017 ዓ.ም");
        let en = d.with_locale(Locale::English);
        assert_eq!(en.to_string(), "July 10 2017 E.C.");
        assert_eq!(en.month_name(), "July");
        assert_eq!(en.day_name(), "Thursday");
        assert_eq!(d.day_name(), "ሐሙስ");
        assert_eq!(en.format("DD/MM/YYYY"), "10/11/2017");
    }

    #[test]
    fn gregorian_roundtrip() {
        let g = GregorianDate::from_ymd(2024, 1, 7).unwrap();
        let d = FluentDate::from_gregorian(g).unwrap();
        assert_eq!(d.to_gregorian().unwrap(), g);
        assert_eq!(d.date(), EthiopianDate::new(2016, 4, 28).unwrap());
    }

    #[test]
    fn invalid_input_is_rejected() {
        let bad = EthiopianDate { year: 2016, month: 1, day: 31 };
        assert!(FluentDate::new(bad).unwrap_err().is_invalid_input());
        assert!(FluentDate::parse("2016/01").is_err());
    }

    #[test]
    fn gregorian_outside_valid_years_is_rejected() {
        // 100-01-01 is 0092-05-07 E.C., below the supported year range.
        let early = GregorianDate::from_ymd(100, 1, 1).unwrap();
        let err = FluentDate::from_gregorian(early).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("0092-05-07"));
        let late = GregorianDate::from_ymd(3100, 1, 1).unwrap();
        assert!(FluentDate::from_gregorian(late).unwrap_err().is_invalid_input());
    }

    #[test]
    fn today_uses_pinned_settings() {
        let pinned = GregorianDate::from_ymd(2023, 9, 12).unwrap();
        let settings = Settings::new()
            .with_evaluation_day(pinned.day_number())
            .with_locale(Locale::English);
        let today = FluentDate::today(&settings).unwrap();
        assert_eq!(today.date(), EthiopianDate::new(2016, 1, 1).unwrap());
        assert_eq!(today.to_string(), "September 1 2016 E.C.");
    }

    #[test]
    fn today_outside_valid_years_is_rejected() {
        let pinned = GregorianDate::from_ymd(100, 1, 1).unwrap();
        let settings = Settings::new().with_evaluation_day(pinned.day_number());
        assert!(FluentDate::today(&settings).unwrap_err().is_invalid_input());
    }
}
