use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::ParserConfig;
use crate::model::TorrentRelease;
use crate::parser::ReleaseParser;
use crate::Result;

static TRACKER_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\[(?:ettv|rartv|rarbg|cttv|publichd|TGx)\]$").unwrap()
});

/// Parser for titles taken from BitTorrent trackers.
#[derive(Debug, Clone, Default)]
pub struct TorrentReleaseParser {
    parser: ReleaseParser,
}

impl TorrentReleaseParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            parser: ReleaseParser::new(config),
        }
    }

    /// Strip the tracker tag and parse. Flags and hash are left for the caller.
    pub fn parse(&self, input: &str) -> Result<TorrentRelease> {
        debug!(input, "Starting parse with BitTorrent standards");

        let cleaned = TRACKER_SUFFIX.replace(input, "");
        let release = self.parser.parse(&cleaned)?;

        Ok(TorrentRelease::new(release))
    }
}
