//! Date-string parsing helpers.
//!
//! Split a textual date into its numeric `(year, month, day)` components.
//! Range checking is left to the calendar that owns the triple.

use crate::errors::{Error, Result};

/// Parse a date string in ISO order (`YYYY-MM-DD`).
///
/// A single leading `-` marks a negative (proleptic) year, as in `-044-03-15`.
///
/// # Errors
/// Returns [`Error::InvalidInput`] naming the raw string if it does not have
/// exactly three `-`-separated numeric components.
pub fn parse_iso_date(s: &str) -> Result<(i32, u8, u8)> {
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let [year, month, day] = split_three(s, body, '-')?;
    let year: i32 = number(s, year)?;
    Ok((
        if negative { -year } else { year },
        number(s, month)?,
        number(s, day)?,
    ))
}

/// Parse a date string in `DD/MM/YYYY` order.
///
/// # Errors
/// Returns [`Error::InvalidInput`] naming the raw string if it does not have
/// exactly three `/`-separated numeric components.
pub fn parse_date_slash(s: &str) -> Result<(i32, u8, u8)> {
    let [day, month, year] = split_three(s, s.trim(), '/')?;
    Ok((
        number(s, year)?,
        number(s, month)?,
        number(s, day)?,
    ))
}

/// Parse either `YYYY-MM-DD` or `DD/MM/YYYY`, chosen by the separator.
pub fn parse_date(s: &str) -> Result<(i32, u8, u8)> {
    if s.contains('/') {
        parse_date_slash(s)
    } else {
        parse_iso_date(s)
    }
}

fn split_three<'a>(raw: &str, body: &'a str, sep: char) -> Result<[&'a str; 3]> {
    let parts: Vec<&str> = body.split(sep).collect();
    match parts.as_slice() {
        [a, b, c] => Ok([*a, *b, *c]),
        _ => Err(Error::InvalidInput(format!(
            "expected 3 components in {raw:?}, found {}",
            parts.len()
        ))),
    }
}

fn number<T: std::str::FromStr>(raw: &str, part: &str) -> Result<T> {
    part.trim().parse().map_err(|_| {
        Error::InvalidInput(format!("non-numeric component {part:?} in {raw:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2017-11-10").unwrap(), (2017, 11, 10));
        assert_eq!(parse_iso_date(" 2016-1-1 ").unwrap(), (2016, 1, 1));
    }

    #[test]
    fn test_parse_date_slash() {
        assert_eq!(parse_date_slash("10/11/2017").unwrap(), (2017, 11, 10));
    }

    #[test]
    fn test_parse_date_dispatch() {
        assert_eq!(parse_date("06/13/2015").unwrap(), (2015, 13, 6));
        assert_eq!(parse_date("2015-13-06").unwrap(), (2015, 13, 6));
    }

    #[test]
    fn wrong_token_count() {
        let err = parse_iso_date("2017-11").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput("expected 3 components in \"2017-11\", found 2".into())
        );
        assert!(parse_date_slash("1/2/3/4").is_err());
    }

    #[test]
    fn non_numeric_component() {
        let err = parse_iso_date("2017-Hamle-10").unwrap_err();
        assert!(err.to_string().contains("\"Hamle\""));
        assert!(err.to_string().contains("2017-Hamle-10"));
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn negative_iso_year() {
        assert_eq!(parse_iso_date("-044-03-15").unwrap(), (-44, 3, 15));
        assert_eq!(parse_iso_date(" -0001-12-31").unwrap(), (-1, 12, 31));
        let err = parse_iso_date("--44-03-15").unwrap_err();
        assert!(err.to_string().contains("found 4"), "{err}");
        assert!(parse_iso_date("-").is_err());
    }

    proptest! {
        #[test]
        fn both_layouts_agree(year in 0i32..10_000, month in 1u8..=13, day in 1u8..=30) {
            let iso = parse_iso_date(&format!("{year:04}-{month:02}-{day:02}")).unwrap();
            let slash = parse_date_slash(&format!("{day}/{month}/{year}")).unwrap();
            prop_assert_eq!(iso, (year, month, day));
            prop_assert_eq!(slash, iso);
        }
    }
}
