//! `Locale`: the two supported rendering locales.

use crate::errors::{Error, Result};

/// Locale used for month, weekday, and era names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// Amharic (Ge'ez script).
    #[default]
    Amharic,
    /// English.
    English,
}

impl Locale {
    /// All supported locales.
    pub const ALL: [Locale; 2] = [Locale::Amharic, Locale::English];

    /// Return the BCP 47 language code (`"am"` or `"en"`).
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Amharic => "am",
            Locale::English => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "am" | "amharic" => Ok(Locale::Amharic),
            "en" | "english" => Ok(Locale::English),
            _ => Err(Error::InvalidInput(format!("unknown locale {s:?}"))),
        }
    }
}
