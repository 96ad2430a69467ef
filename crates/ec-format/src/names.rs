//! Month, weekday, and era names per [`Locale`].
//!
//! English has no native names for Ethiopian months, so an Ethiopian month is
//! labelled with the Gregorian month it customarily corresponds to (see
//! [`EthiopianMonth::gregorian_counterpart`]). Pagume is always "September".

use ec_core::Locale;
use ec_time::{EthiopianMonth, Weekday};

const AMHARIC_MONTHS: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ኅዳር",
    "ታኅሣሥ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜን",
];

/// Monday first.
const AMHARIC_DAYS: [&str; 7] = ["ሰኞ", "ማክሰኞ", "ረቡዕ", "ሐሙስ", "ዓርብ", "ቅዳሜ", "እሑድ"];

/// Monday first.
const ENGLISH_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Name of Ethiopian month `month` (1–13), or `None` if out of range.
pub fn month_name(month: u8, locale: Locale) -> Option<&'static str> {
    let month = EthiopianMonth::from_number(month)?;
    Some(match locale {
        Locale::Amharic => AMHARIC_MONTHS[usize::from(month.number()) - 1],
        Locale::English => month.gregorian_counterpart().long_name(),
    })
}

/// All thirteen month names in calendar order.
pub fn month_names(locale: Locale) -> [&'static str; 13] {
    EthiopianMonth::ALL.map(|m| match locale {
        Locale::Amharic => AMHARIC_MONTHS[usize::from(m.number()) - 1],
        Locale::English => m.gregorian_counterpart().long_name(),
    })
}

/// Name of a weekday.
pub fn day_name(weekday: Weekday, locale: Locale) -> &'static str {
    let index = usize::from(weekday.ordinal()) - 1;
    match locale {
        Locale::Amharic => AMHARIC_DAYS[index],
        Locale::English => ENGLISH_DAYS[index],
    }
}

/// Era suffix for dates in the Ethiopian calendar.
pub fn era_suffix(locale: Locale) -> &'static str {
    match locale {
        Locale::Amharic => "ዓ.ም",
        Locale::English => "E.C.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amharic_months() {
        assert_eq!(month_name(1, Locale::Amharic), Some("መስከረም"));
        assert_eq!(month_name(11, Locale::Amharic), Some("ሐምሌ"));
        assert_eq!(month_name(13, Locale::Amharic), Some("ጳጉሜን"));
        assert_eq!(month_name(0, Locale::Amharic), None);
        assert_eq!(month_name(14, Locale::Amharic), None);
    }

    #[test]
    fn english_months_follow_customary_mapping() {
        assert_eq!(month_name(1, Locale::English), Some("September"));
        assert_eq!(month_name(4, Locale::English), Some("December"));
        assert_eq!(month_name(5, Locale::English), Some("January"));
        assert_eq!(month_name(11, Locale::English), Some("July"));
        assert_eq!(month_name(12, Locale::English), Some("August"));
        assert_eq!(month_name(13, Locale::English), Some("September"));
    }

    #[test]
    fn table_lengths() {
        for locale in Locale::ALL {
            let names = month_names(locale);
            for (i, name) in names.iter().enumerate() {
                assert_eq!(Some(*name), month_name(i as u8 + 1, locale));
            }
        }
    }

    #[test]
    fn day_names_are_monday_based() {
        assert_eq!(day_name(Weekday::Monday, Locale::Amharic), "ሰኞ");
        assert_eq!(day_name(Weekday::Sunday, Locale::Amharic), "እሑድ");
        assert_eq!(day_name(Weekday::Thursday, Locale::English), "Thursday");
        assert_eq!(day_name(Weekday::Sunday, Locale::English), "Sunday");
    }

    #[test]
    fn era_suffixes() {
        assert_eq!(era_suffix(Locale::Amharic), "ዓ.ም");
        assert_eq!(era_suffix(Locale::English), "E.C.");
    }
}
