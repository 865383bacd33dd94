use serde::Deserialize;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Narration languages offered by the audio guide.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoStaticStr,
    EnumString,
    EnumIter,
    Deserialize,
)]
pub enum GuideLanguage {
    #[default]
    #[strum(serialize = "en")]
    #[serde(rename = "en")]
    English,
    #[strum(serialize = "ne")]
    #[serde(rename = "ne")]
    Nepali,
    #[strum(serialize = "hi")]
    #[serde(rename = "hi")]
    Hindi,
    #[strum(serialize = "bo")]
    #[serde(rename = "bo")]
    Tibetan,
    #[strum(serialize = "si")]
    #[serde(rename = "si")]
    Sinhala,
}

impl GuideLanguage {
    /// ISO 639-1 code.
    #[must_use]
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Name written in the language itself.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Nepali => "नेपाली",
            Self::Hindi => "हिन्दी",
            Self::Tibetan => "བོད་སྐད་",
            Self::Sinhala => "සිංහල",
        }
    }

    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::English => "🇺🇸",
            Self::Nepali => "🇳🇵",
            Self::Hindi => "🇮🇳",
            Self::Tibetan => "🏔️",
            Self::Sinhala => "🇱🇰",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioGuideTrack {
    pub id: u32,
    pub title: &'static str,
    pub monastery: &'static str,
    pub narrator: &'static str,
    pub duration_secs: u32,
    pub language: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub downloaded: bool,
}

/// Formats seconds as `m:ss` (e.g. `525` -> `8:45`).
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn clock_pads_seconds() {
        assert_eq!(format_clock(525), "8:45");
        assert_eq!(format_clock(120), "2:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(0), "0:00");
    }

    #[test]
    fn language_codes_round_trip_through_strum() {
        let codes: Vec<_> = GuideLanguage::iter().map(GuideLanguage::code).collect();
        assert_eq!(codes, ["en", "ne", "hi", "bo", "si"]);

        for lang in GuideLanguage::iter() {
            assert_eq!(GuideLanguage::from_str(lang.code()).ok(), Some(lang));
        }
        assert!(GuideLanguage::from_str("fr").is_err());
    }
}
