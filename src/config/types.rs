use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use submarine_parser::config::ParserConfig;
use submarine_parser::{Language, QualitySource};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub parser: ParserSection,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// `[parser]` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParserSection {
    /// Language assumed when a title names none
    #[serde(default = "default_language")]
    pub default_language: Language,

    /// Release groups whose untagged releases imply a source, e.g. `MyGroup = "WEB_DL"`
    #[serde(default)]
    pub release_group_sources: HashMap<String, QualitySource>,

    /// Reject hashed and blank Usenet titles before parsing
    #[serde(default = "default_usenet_validation")]
    pub usenet_validation: bool,
}

fn default_language() -> Language {
    Language::English
}
fn default_usenet_validation() -> bool {
    true
}

impl Default for ParserSection {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            release_group_sources: HashMap::new(),
            usenet_validation: default_usenet_validation(),
        }
    }
}

impl ParserSection {
    pub fn to_parser_config(&self) -> ParserConfig {
        self.release_group_sources
            .iter()
            .fold(ParserConfig::builder(), |builder, (group, source)| {
                builder.release_group_source(group, *source)
            })
            .default_language(self.default_language)
            .usenet_validation(self.usenet_validation)
            .build()
    }
}
