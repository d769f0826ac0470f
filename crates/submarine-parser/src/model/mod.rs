//! Data model types for parsed release information.
//!
//! This module contains the title grammar output, the quality and language
//! enums and the assembled, protocol-tagged release types.

mod language;
mod quality;
mod release;
mod streaming;
mod title;

pub use language::Language;
pub use quality::{QualityModel, QualityResolution, QualityResolutionModel, QualitySource, Revision};
pub use release::{
    MovieReleaseData, Protocol, ProtocolRelease, Release, ReleaseType, SeriesReleaseData,
    SeriesReleaseType, TorrentRelease, TorrentReleaseFlags, UsenetRelease,
};
pub use streaming::StreamingProvider;
pub use title::{MovieTitleMetadata, SeriesTitleMetadata, TitleMetadata};
