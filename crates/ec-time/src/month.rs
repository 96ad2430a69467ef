//! Month enums for both calendars.
//!
//! [`EthiopianMonth`] carries the customary Gregorian counterpart used for
//! English labels: Meskerem pairs with September, Tikimt with October, and so
//! on round to Nehase/August. Pagume, which straddles early September, is
//! labelled September as well. The pairing is a naming convention, not a
//! date conversion.

/// Month of the Ethiopian year.
///
/// Variants are numbered 1–13 (Meskerem = 1, Pagume = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum EthiopianMonth {
    /// Meskerem (1).
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hidar (3).
    Hidar = 3,
    /// Tahsas (4).
    Tahsas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miyazia (8).
    Miyazia = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehase (12).
    Nehase = 12,
    /// Pagume (13), the 5- or 6-day epagomenal month.
    Pagume = 13,
}

impl EthiopianMonth {
    /// All months in calendar order.
    pub const ALL: [EthiopianMonth; 13] = [
        EthiopianMonth::Meskerem,
        EthiopianMonth::Tikimt,
        EthiopianMonth::Hidar,
        EthiopianMonth::Tahsas,
        EthiopianMonth::Tir,
        EthiopianMonth::Yekatit,
        EthiopianMonth::Megabit,
        EthiopianMonth::Miyazia,
        EthiopianMonth::Ginbot,
        EthiopianMonth::Sene,
        EthiopianMonth::Hamle,
        EthiopianMonth::Nehase,
        EthiopianMonth::Pagume,
    ];

    /// Construct from a number (1 = Meskerem … 13 = Pagume).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the Latin transliteration (`"Meskerem"`, `"Tikimt"`, …).
    pub fn transliteration(&self) -> &'static str {
        match self {
            EthiopianMonth::Meskerem => "Meskerem",
            EthiopianMonth::Tikimt => "Tikimt",
            EthiopianMonth::Hidar => "Hidar",
            EthiopianMonth::Tahsas => "Tahsas",
            EthiopianMonth::Tir => "Tir",
            EthiopianMonth::Yekatit => "Yekatit",
            EthiopianMonth::Megabit => "Megabit",
            EthiopianMonth::Miyazia => "Miyazia",
            EthiopianMonth::Ginbot => "Ginbot",
            EthiopianMonth::Sene => "Sene",
            EthiopianMonth::Hamle => "Hamle",
            EthiopianMonth::Nehase => "Nehase",
            EthiopianMonth::Pagume => "Pagume",
        }
    }

    /// Return the customary Gregorian counterpart.
    pub fn gregorian_counterpart(&self) -> GregorianMonth {
        let n = match self {
            EthiopianMonth::Pagume => 9,
            m => (m.number() + 7) % 12 + 1,
        };
        GregorianMonth::ALL[usize::from(n) - 1]
    }
}

impl std::fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.transliteration())
    }
}

impl From<EthiopianMonth> for u8 {
    fn from(m: EthiopianMonth) -> u8 {
        m as u8
    }
}

/// Month of the Gregorian year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GregorianMonth {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl GregorianMonth {
    /// All months in calendar order.
    pub const ALL: [GregorianMonth; 12] = [
        GregorianMonth::January,
        GregorianMonth::February,
        GregorianMonth::March,
        GregorianMonth::April,
        GregorianMonth::May,
        GregorianMonth::June,
        GregorianMonth::July,
        GregorianMonth::August,
        GregorianMonth::September,
        GregorianMonth::October,
        GregorianMonth::November,
        GregorianMonth::December,
    ];

    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the full English name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            GregorianMonth::January => "January",
            GregorianMonth::February => "February",
            GregorianMonth::March => "March",
            GregorianMonth::April => "April",
            GregorianMonth::May => "May",
            GregorianMonth::June => "June",
            GregorianMonth::July => "July",
            GregorianMonth::August => "August",
            GregorianMonth::September => "September",
            GregorianMonth::October => "October",
            GregorianMonth::November => "November",
            GregorianMonth::December => "December",
        }
    }
}

impl std::fmt::Display for GregorianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}

impl From<GregorianMonth> for u8 {
    fn from(m: GregorianMonth) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=13u8 {
            assert_eq!(EthiopianMonth::from_number(n).unwrap().number(), n);
        }
        for n in 1..=12u8 {
            assert_eq!(GregorianMonth::from_number(n).unwrap().number(), n);
        }
    }

    #[test]
    fn out_of_range() {
        assert!(EthiopianMonth::from_number(0).is_none());
        assert!(EthiopianMonth::from_number(14).is_none());
        assert!(GregorianMonth::from_number(0).is_none());
        assert!(GregorianMonth::from_number(13).is_none());
    }

    #[test]
    fn customary_counterparts() {
        use EthiopianMonth::*;
        assert_eq!(Meskerem.gregorian_counterpart(), GregorianMonth::September);
        assert_eq!(Tahsas.gregorian_counterpart(), GregorianMonth::December);
        assert_eq!(Tir.gregorian_counterpart(), GregorianMonth::January);
        assert_eq!(Hamle.gregorian_counterpart(), GregorianMonth::July);
        assert_eq!(Nehase.gregorian_counterpart(), GregorianMonth::August);
        assert_eq!(Pagume.gregorian_counterpart(), GregorianMonth::September);
    }
}
