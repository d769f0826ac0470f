//! Streaming provider enum.

use crate::ParseError;

/// Streaming service a WEB release was captured from.
///
/// Declaration order is the order in which detection patterns are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum StreamingProvider {
    /// Amazon Prime Video
    Amazon,
    /// Netflix
    Netflix,
    /// Apple TV+
    AppleTv,
    /// HBO Max
    HboMax,
    /// Disney+
    Disney,
    /// Hulu
    Hulu,
    /// Crunchyroll
    Crunchyroll,
    /// Funimation
    Funimation,
    /// YouTube Premium (formerly YouTube Red)
    YoutubePremium,
    /// Peacock
    Peacock,
    /// DC Universe
    DcUniverse,
    /// HBO Now
    HboNow,
    /// Paramount+
    ParamountPlus,
    /// Comedy Central
    ComedyCentral,
    /// Crave (Canada)
    Crave,
    /// HIDIVE
    Hidive,
    /// iTunes
    #[cfg_attr(feature = "serde", serde(rename = "ITUNES"))]
    ITunes,
    /// Movies Anywhere
    MoviesAnywhere,
}

impl StreamingProvider {
    /// All providers in detection order.
    pub const ALL: [StreamingProvider; 18] = [
        StreamingProvider::Amazon,
        StreamingProvider::Netflix,
        StreamingProvider::AppleTv,
        StreamingProvider::HboMax,
        StreamingProvider::Disney,
        StreamingProvider::Hulu,
        StreamingProvider::Crunchyroll,
        StreamingProvider::Funimation,
        StreamingProvider::YoutubePremium,
        StreamingProvider::Peacock,
        StreamingProvider::DcUniverse,
        StreamingProvider::HboNow,
        StreamingProvider::ParamountPlus,
        StreamingProvider::ComedyCentral,
        StreamingProvider::Crave,
        StreamingProvider::Hidive,
        StreamingProvider::ITunes,
        StreamingProvider::MoviesAnywhere,
    ];

    /// Display name of the provider.
    pub fn display_name(&self) -> &'static str {
        match self {
            StreamingProvider::Amazon => "Amazon",
            StreamingProvider::Netflix => "Netflix",
            StreamingProvider::AppleTv => "Apple TV+",
            StreamingProvider::HboMax => "HBO Max",
            StreamingProvider::Disney => "Disney+",
            StreamingProvider::Hulu => "Hulu",
            StreamingProvider::Crunchyroll => "Crunchyroll",
            StreamingProvider::Funimation => "Funimation",
            StreamingProvider::YoutubePremium => "YouTube Premium",
            StreamingProvider::Peacock => "Peacock",
            StreamingProvider::DcUniverse => "DC Universe",
            StreamingProvider::HboNow => "HBO Now",
            StreamingProvider::ParamountPlus => "Paramount+",
            StreamingProvider::ComedyCentral => "Comedy Central",
            StreamingProvider::Crave => "Crave",
            StreamingProvider::Hidive => "HIDIVE",
            StreamingProvider::ITunes => "iTunes",
            StreamingProvider::MoviesAnywhere => "Movies Anywhere",
        }
    }
}

impl std::fmt::Display for StreamingProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for StreamingProvider {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amzn" | "amazon" => Ok(StreamingProvider::Amazon),
            "nf" | "netflix" => Ok(StreamingProvider::Netflix),
            "atvp" | "aptv" | "apple tv+" => Ok(StreamingProvider::AppleTv),
            "hmax" | "hbo max" => Ok(StreamingProvider::HboMax),
            "dsnp" | "dsny" | "disney" | "disney+" => Ok(StreamingProvider::Disney),
            "hulu" => Ok(StreamingProvider::Hulu),
            "cr" | "crunchyroll" => Ok(StreamingProvider::Crunchyroll),
            "funi" | "funimation" => Ok(StreamingProvider::Funimation),
            "red" | "youtube premium" => Ok(StreamingProvider::YoutubePremium),
            "pcok" | "peacock" => Ok(StreamingProvider::Peacock),
            "dcu" | "dc universe" => Ok(StreamingProvider::DcUniverse),
            "hbo" | "hbo now" => Ok(StreamingProvider::HboNow),
            "pmtp" | "paramount+" => Ok(StreamingProvider::ParamountPlus),
            "cc" | "comedy central" => Ok(StreamingProvider::ComedyCentral),
            "crav" | "crave" => Ok(StreamingProvider::Crave),
            "hidi" | "hidive" => Ok(StreamingProvider::Hidive),
            "it" | "itunes" => Ok(StreamingProvider::ITunes),
            "ma" | "movies anywhere" => Ok(StreamingProvider::MoviesAnywhere),
            _ => Err(ParseError::format(format!(
                "unknown streaming provider: {}",
                s
            ))),
        }
    }
}
