//! `Weekday`: day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from a Sunday-based number (0 = Sunday … 6 = Saturday).
    ///
    /// Values are taken modulo 7, so any `u8` maps to a weekday.
    pub fn from_sunday_based(n: u8) -> Self {
        match n % 7 {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-based number (0 = Sunday … 6 = Saturday).
    pub fn sunday_based(&self) -> u8 {
        self.ordinal() % 7
    }

    /// The following day.
    pub fn succ(&self) -> Self {
        Weekday::from_sunday_based(self.sunday_based() + 1)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

impl From<Weekday> for u8 {
    fn from(w: Weekday) -> u8 {
        w.ordinal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_based_remap() {
        assert_eq!(Weekday::from_sunday_based(0), Weekday::Sunday);
        assert_eq!(Weekday::from_sunday_based(0).ordinal(), 7);
        assert_eq!(Weekday::from_sunday_based(1).ordinal(), 1);
        assert_eq!(Weekday::from_sunday_based(6), Weekday::Saturday);
        assert_eq!(Weekday::from_sunday_based(13), Weekday::Saturday);
    }

    #[test]
    fn ordinals_roundtrip() {
        for n in 1..=7u8 {
            let w = Weekday::from_ordinal(n).unwrap();
            assert_eq!(w.ordinal(), n);
            assert_eq!(Weekday::from_sunday_based(w.sunday_based()), w);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn succ_wraps() {
        assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
        assert_eq!(Weekday::Monday.succ(), Weekday::Tuesday);
    }
}
