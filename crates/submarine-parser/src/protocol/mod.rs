//! Protocol front-ends.
//!
//! Each front-end removes junk that a particular protocol adds to release
//! titles, runs the [`ReleaseParser`](crate::ReleaseParser) and tags the result.

mod torrent;
mod usenet;

pub use torrent::TorrentReleaseParser;
pub use usenet::{UsenetReleaseParser, UsenetReleaseValidator};

use crate::config::ParserConfig;
use crate::model::{Protocol, ProtocolRelease};
use crate::{ParseError, Result};

/// Boundary check run on a raw title before it is parsed.
pub trait ReleaseValidator: std::fmt::Debug + Send + Sync {
    /// Return [`ParseError::Rejected`] when the title must not be parsed.
    fn validate(&self, title: &str) -> Result<()>;
}

/// Routes titles to the front-end of their protocol.
#[derive(Debug, Clone, Default)]
pub struct ProtocolParser {
    torrent: TorrentReleaseParser,
    usenet: UsenetReleaseParser,
}

impl ProtocolParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            torrent: TorrentReleaseParser::new(config.clone()),
            usenet: UsenetReleaseParser::new(config),
        }
    }

    pub fn parse(&self, title: &str, protocol: Protocol) -> Result<ProtocolRelease> {
        match protocol {
            Protocol::Bittorrent => self.torrent.parse(title).map(ProtocolRelease::Torrent),
            Protocol::Usenet => self.usenet.parse(title).map(ProtocolRelease::Usenet),
            Protocol::Xdcc => Err(ParseError::UnsupportedProtocol(protocol)),
        }
    }
}
