//! Language enum for audio and subtitle tracks.

use crate::ParseError;

/// Language of a release's audio or subtitle tracks.
///
/// Variants are declared in detection order; the language parser reports
/// matches in this order regardless of where they appear in the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Language {
    /// English, the implicit default when nothing else is detected
    English,
    French,
    Spanish,
    German,
    Italian,
    Danish,
    Dutch,
    Japanese,
    Icelandic,
    Chinese,
    Russian,
    Polish,
    Vietnamese,
    Swedish,
    Norwegian,
    Finnish,
    Turkish,
    Portuguese,
    Flemish,
    Greek,
    Korean,
    Hungarian,
    Hebrew,
    Lithuanian,
    Czech,
    Arabic,
    Hindi,
}

impl Language {
    /// All languages in detection order.
    pub const ALL: [Language; 27] = [
        Language::English,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Italian,
        Language::Danish,
        Language::Dutch,
        Language::Japanese,
        Language::Icelandic,
        Language::Chinese,
        Language::Russian,
        Language::Polish,
        Language::Vietnamese,
        Language::Swedish,
        Language::Norwegian,
        Language::Finnish,
        Language::Turkish,
        Language::Portuguese,
        Language::Flemish,
        Language::Greek,
        Language::Korean,
        Language::Hungarian,
        Language::Hebrew,
        Language::Lithuanian,
        Language::Czech,
        Language::Arabic,
        Language::Hindi,
    ];

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Danish => "Danish",
            Language::Dutch => "Dutch",
            Language::Japanese => "Japanese",
            Language::Icelandic => "Icelandic",
            Language::Chinese => "Chinese",
            Language::Russian => "Russian",
            Language::Polish => "Polish",
            Language::Vietnamese => "Vietnamese",
            Language::Swedish => "Swedish",
            Language::Norwegian => "Norwegian",
            Language::Finnish => "Finnish",
            Language::Turkish => "Turkish",
            Language::Portuguese => "Portuguese",
            Language::Flemish => "Flemish",
            Language::Greek => "Greek",
            Language::Korean => "Korean",
            Language::Hungarian => "Hungarian",
            Language::Hebrew => "Hebrew",
            Language::Lithuanian => "Lithuanian",
            Language::Czech => "Czech",
            Language::Arabic => "Arabic",
            Language::Hindi => "Hindi",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::format(format!("unknown language: {}", s)))
    }
}
