//! Assembled release types.

use bitflags::bitflags;

use super::{Language, QualityModel, StreamingProvider};
use crate::ParseError;

/// Transfer protocol a release was published on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Protocol {
    Bittorrent,
    Usenet,
    Xdcc,
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Bittorrent => write!(f, "BITTORRENT"),
            Protocol::Usenet => write!(f, "USENET"),
            Protocol::Xdcc => write!(f, "XDCC"),
        }
    }
}

impl std::str::FromStr for Protocol {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bittorrent" | "torrent" => Ok(Protocol::Bittorrent),
            "usenet" | "nzb" => Ok(Protocol::Usenet),
            "xdcc" => Ok(Protocol::Xdcc),
            _ => Err(ParseError::format(format!("unknown protocol: {}", s))),
        }
    }
}

/// Kind of media a release contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ReleaseType {
    #[default]
    Unknown,
    Series,
    Movie,
}

/// How much of a series a release covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum SeriesReleaseType {
    Episode,
    FullSeason,
    PartialSeason,
    MultiSeason,
    MultiEpisodes,
}

impl SeriesReleaseType {
    /// Derive the release type from the number of seasons, episodes and
    /// absolute episodes. Rules are checked in order; `None` means the
    /// combination has no meaning.
    pub fn from_counts(seasons: usize, episodes: usize, absolute_episodes: usize) -> Option<Self> {
        match seasons {
            n if n > 1 => Some(SeriesReleaseType::MultiSeason),
            1 if episodes == 0 => Some(SeriesReleaseType::FullSeason),
            1 if episodes > 1 => Some(SeriesReleaseType::PartialSeason),
            0 | 1 if episodes == 1 => Some(SeriesReleaseType::Episode),
            0 if absolute_episodes > 1 => Some(SeriesReleaseType::MultiEpisodes),
            0 if absolute_episodes == 1 => Some(SeriesReleaseType::Episode),
            _ => None,
        }
    }
}

/// Episode information of a series release.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesReleaseData {
    pub release_type: SeriesReleaseType,
    pub seasons: Vec<u32>,
    pub episodes: Vec<u32>,
    pub absolute_episodes: Vec<u32>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub special_absolute_episodes: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub air_date: Option<chrono::NaiveDate>,
}

/// Movie specific information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieReleaseData {
    pub edition: Option<String>,
}

/// A parsed release, independent of the protocol it came from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Release {
    /// Input after trimming and website tag removal
    pub full_title: String,
    pub title: String,
    pub year: Option<u16>,
    pub aliases: Vec<String>,
    /// Never empty
    pub languages: Vec<Language>,
    pub streaming_provider: Option<StreamingProvider>,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub release_type: ReleaseType,
    pub series_release_data: Option<SeriesReleaseData>,
    pub movie_release_data: Option<MovieReleaseData>,
    pub quality: QualityModel,
    pub protocol: Option<Protocol>,
    pub release_group: Option<String>,
    pub release_hash: Option<String>,
}

bitflags! {
    /// Tracker promotion and origin markers of a torrent.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TorrentReleaseFlags: u32 {
        const FREELEECH = 1 << 1;
        const HALFLEECH = 1 << 2;
        const NEUTRALLEECH = 1 << 3;
        const DOUBLE_UPLOAD = 1 << 4;
        const OTHER_PROMOTION = 1 << 5;
        const SCENE = 1 << 6;
        const INTERNAL = 1 << 7;
        const EXCLUSIVE = 1 << 8;
    }
}

impl TorrentReleaseFlags {
    /// No flags set.
    pub const NONE: Self = Self::empty();
}

/// A release published on a BitTorrent tracker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TorrentRelease {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub release: Release,
    pub flags: TorrentReleaseFlags,
    /// Info hash, when known by the caller
    pub hash: Option<String>,
}

impl TorrentRelease {
    pub fn new(mut release: Release) -> Self {
        release.protocol = Some(Protocol::Bittorrent);
        Self {
            release,
            flags: TorrentReleaseFlags::NONE,
            hash: None,
        }
    }

    pub fn with_flags(mut self, flags: TorrentReleaseFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }
}

/// A release published on a Usenet indexer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UsenetRelease {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub release: Release,
}

impl UsenetRelease {
    pub fn new(mut release: Release) -> Self {
        release.protocol = Some(Protocol::Usenet);
        Self { release }
    }
}

/// A protocol-tagged release as returned by [`crate::parse`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ProtocolRelease {
    Torrent(TorrentRelease),
    Usenet(UsenetRelease),
}

impl ProtocolRelease {
    pub fn release(&self) -> &Release {
        match self {
            ProtocolRelease::Torrent(torrent) => &torrent.release,
            ProtocolRelease::Usenet(usenet) => &usenet.release,
        }
    }

    pub fn into_release(self) -> Release {
        match self {
            ProtocolRelease::Torrent(torrent) => torrent.release,
            ProtocolRelease::Usenet(usenet) => usenet.release,
        }
    }
}
