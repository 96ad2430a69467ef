//! Formatting across whole years and locales.

use ec_core::Locale;
use ec_format::{day_name, format, month_name, DEFAULT_PATTERN};
use ec_time::{month_length, month_start_weekday, to_gregorian, EthiopianDate};
use proptest::prelude::*;

#[test]
fn every_day_of_a_leap_year_formats() {
    let year = 2019;
    for month in 1..=13u8 {
        for day in 1..=month_length(month, year) {
            let d = EthiopianDate::new(year, month, day).unwrap();
            assert_eq!(
                format(&d, "YYYY-MM-DD", Locale::English),
                d.to_string()
            );
            let english = format(&d, DEFAULT_PATTERN, Locale::English);
            assert!(english.starts_with(month_name(month, Locale::English).unwrap()));
            assert!(english.ends_with(&format!(" {day} 2019 E.C.")));
        }
    }
}

#[test]
fn weekday_token_matches_gregorian_weekday() {
    for month in 1..=13u8 {
        let first = EthiopianDate::new(2017, month, 1).unwrap();
        let weekday = to_gregorian(first).unwrap().weekday();
        assert_eq!(month_start_weekday(month, 2017).unwrap(), weekday);
        for locale in Locale::ALL {
            assert_eq!(format(&first, "dddd", locale), day_name(weekday, locale));
        }
    }
}

#[test]
fn pagume_is_labelled_september_in_english() {
    let pagume = EthiopianDate::new(2016, 13, 3).unwrap();
    assert_eq!(format(&pagume, "MMMM D", Locale::English), "September 3");
    assert_eq!(format(&pagume, "MMMM D", Locale::Amharic), "ጳጉሜን 3");
}

proptest! {
    /// Text with no token characters passes through unchanged.
    #[test]
    fn plain_text_is_untouched(text in "[a-cf-z0-9 ,./:\\-ሀ-ፐ]{0,40}") {
        let d = EthiopianDate::new(2017, 11, 10).unwrap();
        for locale in Locale::ALL {
            prop_assert_eq!(format(&d, &text, locale), text.clone());
        }
    }
}
