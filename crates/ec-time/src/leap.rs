//! Leap-year predicates for both calendars.
//!
//! Both predicates are total over every primitive integer type. Divisors that
//! do not fit in the year's type (e.g. 400 for `u8`) only divide zero.

use num_traits::{Euclid, PrimInt};

/// Whether `year` is a leap year in the Ethiopian calendar.
///
/// Years congruent to 3 modulo 4 carry a sixth epagomenal day (Pagume 6).
/// Negative years follow the same cycle (`-1` is leap).
pub fn is_leap_year_ethiopian<T: PrimInt + Euclid>(year: T) -> bool {
    match (T::from(4), T::from(3)) {
        (Some(four), Some(three)) => year.rem_euclid(&four) == three,
        _ => false,
    }
}

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year_gregorian<T: PrimInt>(year: T) -> bool {
    divisible(year, 4) && (!divisible(year, 100) || divisible(year, 400))
}

fn divisible<T: PrimInt>(year: T, divisor: u16) -> bool {
    match T::from(divisor) {
        Some(d) => (year % d).is_zero(),
        None => year.is_zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ethiopian_cycle() {
        assert!(is_leap_year_ethiopian(2019));
        assert!(!is_leap_year_ethiopian(2018));
        assert!(is_leap_year_ethiopian(2015));
        assert!(!is_leap_year_ethiopian(2016));
        assert!(is_leap_year_ethiopian(3u8));
        assert!(is_leap_year_ethiopian(-1i32));
        assert!(!is_leap_year_ethiopian(-4i64));
    }

    #[test]
    fn gregorian_rule() {
        assert!(is_leap_year_gregorian(2000));
        assert!(is_leap_year_gregorian(2024));
        assert!(!is_leap_year_gregorian(1900));
        assert!(!is_leap_year_gregorian(2100));
        assert!(!is_leap_year_gregorian(2023));
        assert!(is_leap_year_gregorian(-4i32));
        assert!(is_leap_year_gregorian(0u8));
        assert!(!is_leap_year_gregorian(200u8));
        assert!(is_leap_year_gregorian(120i8));
    }

    #[test]
    fn one_ethiopian_leap_in_every_four_years() {
        for start in -20i32..3000 {
            let leaps = (start..start + 4)
                .filter(|&y| is_leap_year_ethiopian(y))
                .count();
            assert_eq!(leaps, 1, "window starting at {start}");
        }
    }
}
