//! Release assembler.
//!
//! Cleans the raw input, runs the title grammar on the cleaned title and the
//! language, quality, release group and streaming provider parsers on the
//! full title, then merges everything into a [`Release`].

mod language;
mod normalize;
mod patterns;
mod quality;
mod release_group;
mod streaming;
mod title;

pub use language::parse_languages;
pub use normalize::{remove_file_extension, strip_website};
pub use quality::parse_quality;
pub use release_group::parse_release_group;
pub use streaming::parse_streaming_provider;
pub use title::parse_title;

use tracing::debug;

use crate::config::ParserConfig;
use crate::model::{
    MovieReleaseData, QualitySource, Release, ReleaseType, SeriesReleaseData, SeriesReleaseType,
    SeriesTitleMetadata, TitleMetadata,
};
use crate::registry;
use crate::{ParseError, Result};

/// Protocol independent release parser.
///
/// ```
/// use submarine_parser::{ReleaseParser, ReleaseType};
///
/// let release = ReleaseParser::default()
///     .parse("The.Show.S01E02.1080p.WEB-DL.x264-GROUP")
///     .unwrap();
/// assert_eq!(release.title, "The Show");
/// assert_eq!(release.release_type, ReleaseType::Series);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReleaseParser {
    config: ParserConfig,
}

impl ReleaseParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a release title. The returned release has no protocol set.
    pub fn parse(&self, input: &str) -> Result<Release> {
        debug!(input, "Starting parse");

        let full_title = strip_website(input);
        let cleaned = remove_file_extension(&full_title);
        let cleaned = normalize::normalize_brackets(&cleaned);
        let cleaned = normalize::pre_substitute(&cleaned);
        let simple = normalize::simple_title(&cleaned);

        let metadata = parse_title(&simple)?;

        let languages = parse_languages(&full_title, self.config.default_language);
        let mut quality = parse_quality(&full_title);
        let release_group = metadata
            .group()
            .map(str::to_string)
            .or_else(|| parse_release_group(&full_title));

        let streaming_provider = if quality.resolution.source.is_web() {
            parse_streaming_provider(&full_title)
        } else {
            debug!(
                source = ?quality.resolution.source,
                "Skipping streaming provider, release is not a web release"
            );
            None
        };

        if quality.resolution.source == QualitySource::Unknown {
            if let Some(source) = release_group.as_deref().and_then(|g| self.group_source(g)) {
                debug!(
                    group = release_group.as_deref().unwrap_or_default(),
                    source = ?source,
                    "Applying implied source of release group"
                );
                quality.resolution.source = source;
            }
        }

        let mut release = Release {
            title: metadata.main_title().to_string(),
            year: metadata.year(),
            aliases: metadata.aliases().to_vec(),
            release_hash: metadata.hash().map(str::to_string),
            full_title,
            languages,
            streaming_provider,
            release_type: ReleaseType::Unknown,
            series_release_data: None,
            movie_release_data: None,
            quality,
            protocol: None,
            release_group,
        };

        match metadata {
            TitleMetadata::Series(series) => {
                release.release_type = ReleaseType::Series;
                release.series_release_data = Some(series_release_data(series)?);
            }
            TitleMetadata::Movie(movie) => {
                release.release_type = ReleaseType::Movie;
                release.movie_release_data = Some(MovieReleaseData {
                    edition: movie.edition,
                });
            }
        }

        debug!(title = %release.title, release_type = ?release.release_type, "Parsed release");
        Ok(release)
    }

    fn group_source(&self, group: &str) -> Option<QualitySource> {
        self.config
            .release_group_source(group)
            .or_else(|| registry::edge_case_source(group))
    }
}

fn series_release_data(series: SeriesTitleMetadata) -> Result<SeriesReleaseData> {
    let absolute_count = series.absolute_episodes.len() + series.special_absolute_episodes.len();

    let release_type = SeriesReleaseType::from_counts(
        series.seasons.len(),
        series.episodes.len(),
        absolute_count,
    )
    .or_else(|| {
        let only_air_date = series.seasons.is_empty()
            && series.episodes.is_empty()
            && absolute_count == 0
            && series.air_date.is_some();
        only_air_date.then_some(SeriesReleaseType::Episode)
    })
    .ok_or_else(|| {
        ParseError::invalid_release(format!(
            "unexpected numbering: {} seasons, {} episodes, {} absolute episodes",
            series.seasons.len(),
            series.episodes.len(),
            absolute_count
        ))
    })?;

    Ok(SeriesReleaseData {
        release_type,
        seasons: series.seasons,
        episodes: series.episodes,
        absolute_episodes: series.absolute_episodes,
        special_absolute_episodes: series.special_absolute_episodes,
        special: series.special,
        air_date: series.air_date,
    })
}
