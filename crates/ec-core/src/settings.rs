//! Engine settings.
//!
//! [`Settings`] holds the **evaluation date** and the default [`Locale`].
//! It is a plain value handed to the few entry points that need it; there is
//! no process-wide instance. When no evaluation date is set, "today" is read
//! from the wall clock by `ec_time::clock::today`, once per call.

use crate::locale::Locale;
use crate::DayNumber;

/// Smallest Ethiopian year accepted by validation of external input.
pub const MIN_VALID_YEAR: i32 = 1000;

/// Largest Ethiopian year accepted by validation of external input.
pub const MAX_VALID_YEAR: i32 = 3000;

/// Configuration consumed by the clock and the fluent wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Settings {
    /// Gregorian day number used as "today"; `None` means the wall clock.
    evaluation_day: Option<DayNumber>,
    /// Locale used when none is given explicitly.
    locale: Locale,
}

impl Settings {
    /// Settings with no evaluation-date override and the default locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the evaluation date as a Gregorian day number
    /// (0001-01-01 = 1), if one has been set.
    pub fn evaluation_day(&self) -> Option<DayNumber> {
        self.evaluation_day
    }

    /// Pin "today" to the given Gregorian day number.
    pub fn with_evaluation_day(mut self, day: DayNumber) -> Self {
        self.evaluation_day = Some(day);
        self
    }

    /// Remove the evaluation-date override so the wall clock is used again.
    pub fn clear_evaluation_day(mut self) -> Self {
        self.evaluation_day = None;
        self
    }

    /// Return the default locale.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Set the default locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
