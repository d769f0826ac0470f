use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::debug;

use super::ReleaseValidator;
use crate::config::ParserConfig;
use crate::model::UsenetRelease;
use crate::parser::{remove_file_extension, ReleaseParser};
use crate::util::{is_not_blank, reverse};
use crate::{ParseError, Result};

static CLEAN_RELEASE_GROUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(-(RP|1|NZBGeek|Obfuscated|Scrambled|sample|Pre|postbot|xpost|Rakuv[a-z0-9]*|WhiteRev|BUYMORE|AsRequested|AlternativeToRequested|GEROV|Z0iDS3N|Chamele0n|4P|4Planet|AlteZachen|RePACKPOST))+$").unwrap()
});

// Case-sensitive, reversed names keep their original casing
static REVERSED_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[-._ ])(p027|p0801|\d{2,3}E\d{2}S)[-._ ]").unwrap());

static HASHED_RELEASES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^[0-9a-zA-Z]{32}$",
        r"^[a-z0-9]{24}$",
        r"^[A-Z]{11}\d{3}$",
        r"^[a-z]{12}\d{3}$",
        r"^Backup_\d{5,}S\d{2}-\d{2}$",
        r"^123$",
        r"(?i)^abc$",
        r"(?i)^b00bs$",
        r"^\d{6}_\d{2}$",
        r"^[0-9a-zA-Z]{30}$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Rejects Usenet titles that cannot carry release information.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsenetReleaseValidator;

impl ReleaseValidator for UsenetReleaseValidator {
    fn validate(&self, title: &str) -> Result<()> {
        if !is_not_blank(title) {
            return Err(ParseError::rejected("title is blank"));
        }

        let name = remove_file_extension(title.trim());
        if HASHED_RELEASES.iter().any(|regex| regex.is_match(&name)) {
            return Err(ParseError::rejected(format!("{} is a hashed release name", name)));
        }

        Ok(())
    }
}

/// Parser for titles taken from Usenet indexers.
#[derive(Debug, Clone)]
pub struct UsenetReleaseParser {
    parser: ReleaseParser,
    validator: Option<Arc<dyn ReleaseValidator>>,
}

impl UsenetReleaseParser {
    /// Create a parser using [`UsenetReleaseValidator`] unless validation is
    /// disabled in the config.
    pub fn new(config: ParserConfig) -> Self {
        let validator: Option<Arc<dyn ReleaseValidator>> = if config.usenet_validation {
            Some(Arc::new(UsenetReleaseValidator))
        } else {
            None
        };

        Self {
            parser: ReleaseParser::new(config),
            validator,
        }
    }

    /// Replace the validator run before parsing.
    pub fn with_validator(mut self, validator: impl ReleaseValidator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn parse(&self, input: &str) -> Result<UsenetRelease> {
        debug!(input, "Starting parse with Usenet standards");

        if let Some(validator) = &self.validator {
            validator.validate(input)?;
        }

        let mut title = input.to_string();

        if REVERSED_TITLE.is_match(&title) {
            let without_extension = remove_file_extension(&title);
            let extension = &title[without_extension.len()..];
            title = format!("{}{}", reverse(&without_extension), extension);
            debug!(title = %title, "Reversed name detected");
        }

        let cleaned = CLEAN_RELEASE_GROUP.replace(&title, "");
        let release = self.parser.parse(&cleaned)?;

        Ok(UsenetRelease::new(release))
    }
}

impl Default for UsenetReleaseParser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Protocol, SeriesReleaseType};
    use assert_matches::assert_matches;

    #[test]
    fn test_repost_suffix_removed() {
        let usenet = UsenetReleaseParser::default()
            .parse("Title.Someone.Returns.AKA.Title.Someone.Returns.2010.DVDRip.x264-HANDJOB-BUYMORE")
            .unwrap();

        let release = usenet.release;
        assert_eq!(release.title, "Title Someone Returns");
        assert_eq!(release.aliases, vec!["Title Someone Returns".to_string()]);
        assert_eq!(release.year, Some(2010));
        assert_eq!(release.release_group.as_deref(), Some("HANDJOB"));
        assert_eq!(release.protocol, Some(Protocol::Usenet));
    }

    #[test]
    fn test_reversed_title() {
        let usenet = UsenetReleaseParser::default()
            .parse("PUORG-462x.LD-BEW.p0801.20E10S.wohS.ehT.mkv")
            .unwrap();

        let release = usenet.release;
        assert_eq!(release.title, "The Show");
        assert_eq!(release.release_group.as_deref(), Some("GROUP"));

        let series = release.series_release_data.unwrap();
        assert_eq!(series.release_type, SeriesReleaseType::Episode);
        assert_eq!(series.seasons, vec![1]);
        assert_eq!(series.episodes, vec![2]);
    }

    #[test]
    fn test_hashed_titles_rejected() {
        let parser = UsenetReleaseParser::default();

        assert_matches!(
            parser.parse("0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d"),
            Err(ParseError::Rejected(_))
        );
        assert_matches!(parser.parse("abc.nzb"), Err(ParseError::Rejected(_)));
        assert_matches!(parser.parse("   "), Err(ParseError::Rejected(_)));
    }

    #[test]
    fn test_validation_can_be_disabled() {
        let config = ParserConfig::builder().usenet_validation(false).build();
        let result = UsenetReleaseParser::new(config).parse("0a1b2c3d4e5f6a7b8c9d0e1f2a3b4c5d");

        assert!(!matches!(result, Err(ParseError::Rejected(_))));
    }

    #[derive(Debug)]
    struct RejectAll;

    impl ReleaseValidator for RejectAll {
        fn validate(&self, title: &str) -> Result<()> {
            Err(ParseError::rejected(title))
        }
    }

    #[test]
    fn test_custom_validator() {
        let parser = UsenetReleaseParser::default().with_validator(RejectAll);

        assert_matches!(
            parser.parse("The.Show.S01E02.720p.HDTV.x264-GROUP"),
            Err(ParseError::Rejected(_))
        );
    }
}
