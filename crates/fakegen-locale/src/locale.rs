//! The closed set of supported locales.

use crate::error::LocaleParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A regional configuration controlling name, address, and phone formatting.
///
/// The set is closed: each variant maps to an alphabet, a location template,
/// a phone plan, and a word-list table. `en_US` is the baseline every
/// fallback path resolves to.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// United States (baseline).
    #[default]
    EnUs,
    /// Russia.
    RuRu,
    /// France.
    FrFr,
}

impl Locale {
    /// All supported locales, in display order.
    pub const ALL: [Self; 3] = [Self::EnUs, Self::RuRu, Self::FrFr];

    /// BCP-47-style tag for this locale.
    #[inline]
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en_US",
            Self::RuRu => "ru_RU",
            Self::FrFr => "fr_FR",
        }
    }

    /// Parse a tag, recovering to the baseline locale on anything
    /// unrecognized. Unknown locales must degrade, not fail.
    #[inline]
    #[must_use]
    pub fn from_tag_lossy(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en_US" => Ok(Self::EnUs),
            "ru_RU" => Ok(Self::RuRu),
            "fr_FR" => Ok(Self::FrFr),
            _ => Err(LocaleParseError { tag: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip() {
        for locale in Locale::ALL {
            assert_eq!(locale.tag().parse::<Locale>().unwrap(), locale);
        }
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        let err = "de_DE".parse::<Locale>().unwrap_err();
        assert_eq!(err.tag, "de_DE");
    }

    #[test]
    fn lossy_parse_falls_back_to_baseline() {
        assert_eq!(Locale::from_tag_lossy("de_DE"), Locale::EnUs);
        assert_eq!(Locale::from_tag_lossy(""), Locale::EnUs);
        assert_eq!(Locale::from_tag_lossy("ru_RU"), Locale::RuRu);
    }

    #[test]
    fn serde_uses_snake_case_variants() {
        let json = serde_json::to_string(&Locale::RuRu).unwrap();
        assert_eq!(json, "\"ru_ru\"");
        assert_eq!(serde_json::from_str::<Locale>("\"fr_fr\"").unwrap(), Locale::FrFr);
    }
}
