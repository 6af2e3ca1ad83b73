//! Supported locales.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A storefront locale. The set is closed: Uzbek, Russian, English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Uzbek (Latin script). The baseline locale.
    #[default]
    Uz,
    /// Russian.
    Ru,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale, in picker order.
    pub const ALL: [Locale; 3] = [Locale::Uz, Locale::Ru, Locale::En];

    /// The persisted code (`"uz"`, `"ru"`, `"en"`).
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Uz => "uz",
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// The locale's name in its own language, for the locale picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::Uz => "O'zbekcha",
            Locale::Ru => "Русский",
            Locale::En => "English",
        }
    }

    /// Currency suffix shown after prices.
    pub fn currency_suffix(&self) -> &'static str {
        match self {
            Locale::Uz => "so'm",
            Locale::Ru => "сум",
            Locale::En => "UZS",
        }
    }

    /// Match a code exactly as [`Locale::code`] writes it. Used when reading
    /// a persisted locale, where anything else counts as unrecognised.
    pub fn from_exact_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Parse a locale code, accepting any ASCII case.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }
}

impl FromStr for Locale {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| CommerceError::UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
