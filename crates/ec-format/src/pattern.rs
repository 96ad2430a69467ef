//! Pattern formatting for Ethiopian dates.
//!
//! | Token  | Output                                   |
//! |--------|------------------------------------------|
//! | `YYYY` | year, at least four digits               |
//! | `MMMM` | month name in the requested locale       |
//! | `MM`   | month, two digits                        |
//! | `M`    | month                                    |
//! | `dddd` | weekday name                             |
//! | `DD`   | day, two digits                          |
//! | `D`    | day                                      |
//! | `E`    | era suffix (`ዓ.ም` / `E.C.`)              |
//!
//! The pattern is scanned once, left to right. At each position the first
//! token in the table above that matches wins, so `MMMM` is never read as
//! four `M`s. Substituted text is not scanned again; every other character is
//! copied unchanged.

use ec_core::Locale;
use ec_time::EthiopianDate;

use crate::names::{day_name, era_suffix, month_name};

/// Pattern used when none is given.
pub const DEFAULT_PATTERN: &str = "MMMM D YYYY E";

#[derive(Debug, Clone, Copy)]
enum Token {
    Year,
    MonthName,
    MonthPadded,
    Month,
    WeekdayName,
    DayPadded,
    Day,
    Era,
}

/// Tokens in substitution precedence.
const TOKENS: [(&str, Token); 8] = [
    ("YYYY", Token::Year),
    ("MMMM", Token::MonthName),
    ("MM", Token::MonthPadded),
    ("M", Token::Month),
    ("dddd", Token::WeekdayName),
    ("DD", Token::DayPadded),
    ("D", Token::Day),
    ("E", Token::Era),
];

/// Render `date` according to `pattern` in `locale`.
///
/// ```
/// use ec_core::Locale;
/// use ec_format::format;
/// use ec_time::EthiopianDate;
///
/// let date = EthiopianDate::new(2017, 11, 10).unwrap();
/// assert_eq!(format(&date, "dddd, MMMM D YYYY E", Locale::English), "Thursday, July 10 2017 E.C.");
/// assert_eq!(format(&date, "YYYY/MM/DD", Locale::Amharic), "2017/11/10");
/// ```
pub fn format(date: &EthiopianDate, pattern: &str, locale: Locale) -> String {
    let mut out = String::with_capacity(pattern.len() + 16);
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        match TOKENS.iter().find(|(text, _)| rest.starts_with(text)) {
            Some(&(text, token)) => {
                render(token, text, date, locale, &mut out);
                rest = &rest[text.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

fn render(token: Token, text: &str, date: &EthiopianDate, locale: Locale, out: &mut String) {
    match token {
        Token::Year => out.push_str(&format!("{:04}", date.year)),
        // A month outside 1–13 has no name; keep the token as written.
        Token::MonthName => out.push_str(month_name(date.month, locale).unwrap_or(text)),
        Token::MonthPadded => out.push_str(&format!("{:02}", date.month)),
        Token::Month => out.push_str(&date.month.to_string()),
        Token::WeekdayName => out.push_str(day_name(date.weekday(), locale)),
        Token::DayPadded => out.push_str(&format!("{:02}", date.day)),
        Token::Day => out.push_str(&date.day.to_string()),
        Token::Era => out.push_str(era_suffix(locale)),
    }
}
