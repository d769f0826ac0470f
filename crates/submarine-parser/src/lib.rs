//! # submarine-parser
//!
//! A parser for torrent and Usenet release titles.
//!
//! Release titles carry the title, year, season and episode numbers, quality,
//! languages, streaming provider and release group of a release in a loosely
//! standardised form. This crate turns them into a typed [`Release`].
//!
//! ## Quick Start
//!
//! ```
//! use submarine_parser::{parse, Protocol, ReleaseType};
//!
//! let release = parse("The.Show.S01E02.1080p.WEB-DL.x264-GROUP", Protocol::Bittorrent).unwrap();
//! let release = release.release();
//!
//! assert_eq!(release.title, "The Show");
//! assert_eq!(release.release_type, ReleaseType::Series);
//! assert_eq!(release.release_group.as_deref(), Some("GROUP"));
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use submarine_parser::{Language, ReleaseParser};
//! use submarine_parser::config::ParserConfig;
//!
//! let config = ParserConfig::builder()
//!     .default_language(Language::German)
//!     .build();
//!
//! let release = ReleaseParser::new(config)
//!     .parse("Movie.Title.2010.1080p.BluRay.x264-GRP")
//!     .unwrap();
//! assert_eq!(release.languages, vec![Language::German]);
//! ```

pub mod config;
pub mod lexer;
pub mod model;
pub mod protocol;
pub mod registry;

mod error;
mod parser;
mod util;

// Re-export main types for convenience
pub use error::{ParseError, Result};
pub use model::{
    Language, MovieReleaseData, MovieTitleMetadata, Protocol, ProtocolRelease, QualityModel,
    QualityResolution, QualityResolutionModel, QualitySource, Release, ReleaseType, Revision,
    SeriesReleaseData, SeriesReleaseType, SeriesTitleMetadata, StreamingProvider, TitleMetadata,
    TorrentRelease, TorrentReleaseFlags, UsenetRelease,
};
pub use parser::{
    parse_languages, parse_quality, parse_release_group, parse_streaming_provider, parse_title,
    ReleaseParser,
};
pub use protocol::{
    ProtocolParser, ReleaseValidator, TorrentReleaseParser, UsenetReleaseParser,
    UsenetReleaseValidator,
};

/// Parse a release title published on `protocol` using default settings.
///
/// For more control, use [`ProtocolParser`] with a custom
/// [`ParserConfig`](config::ParserConfig).
///
/// # Examples
///
/// ```
/// use submarine_parser::{parse, Protocol};
///
/// let release = parse("The.Matrix.1999.1080p.BluRay.x264-GROUP", Protocol::Usenet).unwrap();
/// assert_eq!(release.release().title, "The Matrix");
/// assert_eq!(release.release().year, Some(1999));
/// ```
pub fn parse(title: &str, protocol: Protocol) -> Result<ProtocolRelease> {
    ProtocolParser::default().parse(title, protocol)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(title: &str) -> Release {
        parse(title, Protocol::Bittorrent).unwrap().into_release()
    }

    #[test]
    fn test_parse_movie() {
        let result = release("The.Matrix.1999.1080p.BluRay.x264-GROUP");
        assert_eq!(result.title, "The Matrix");
        assert_eq!(result.year, Some(1999));
        assert_eq!(
            result.quality.resolution.resolution,
            Some(QualityResolution::R1080p)
        );
        assert_eq!(result.quality.resolution.source, QualitySource::Bluray);
        assert_eq!(result.release_group.as_deref(), Some("GROUP"));
        assert_eq!(result.release_type, ReleaseType::Movie);
    }

    #[test]
    fn test_parse_tv_episode() {
        let result = release("Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND");
        assert_eq!(result.title, "Breaking Bad");
        assert_eq!(result.release_type, ReleaseType::Series);

        let series = result.series_release_data.unwrap();
        assert_eq!(series.seasons, vec![1]);
        assert_eq!(series.episodes, vec![1]);
        assert_eq!(
            result.quality.resolution.resolution,
            Some(QualityResolution::R720p)
        );
    }

    #[test]
    fn test_parse_multi_episode() {
        let result = release("Show.S01E01E02.720p.WEB-DL.x264-GROUP");
        let series = result.series_release_data.unwrap();
        assert_eq!(series.release_type, SeriesReleaseType::PartialSeason);
        assert_eq!(series.seasons, vec![1]);
        assert_eq!(series.episodes, vec![1, 2]);
    }

    #[test]
    fn test_parse_web_release() {
        let result = release("Movie.2023.1080p.AMZN.WEB-DL.DDP5.1.H.264-GROUP");
        assert_eq!(result.quality.resolution.source, QualitySource::WebDl);
        assert_eq!(result.streaming_provider, Some(StreamingProvider::Amazon));
    }

    #[test]
    fn test_full_title_preserved() {
        let input = "Some.Movie.2021.1080p.WEB-DL-GRP";
        assert_eq!(release(input).full_title, input);
    }

    #[test]
    fn test_xdcc_unsupported() {
        assert!(matches!(
            parse("Some.Movie.2021.1080p.WEB-DL-GRP", Protocol::Xdcc),
            Err(ParseError::UnsupportedProtocol(Protocol::Xdcc))
        ));
    }
}
