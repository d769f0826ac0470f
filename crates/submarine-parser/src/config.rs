//! Parser configuration.

use std::collections::HashMap;

use crate::model::{Language, QualitySource};

/// Configuration for the release parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use submarine_parser::config::ParserConfig;
/// use submarine_parser::{Language, QualitySource};
///
/// let config = ParserConfig::builder()
///     .default_language(Language::German)
///     .release_group_source("NanDesuKa", QualitySource::WebDl)
///     .build();
///
/// assert_eq!(config.default_language, Language::German);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Language reported when no language token is found.
    /// Default: English
    pub default_language: Language,

    /// Extra release groups whose untagged releases imply a source.
    /// Keys are stored lower case; the built-in table is always consulted too.
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deserialize_group_sources")
    )]
    pub release_group_sources: HashMap<String, QualitySource>,

    /// Whether the Usenet front-end rejects obfuscated names.
    /// Default: true
    pub usenet_validation: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            default_language: Language::English,
            release_group_sources: HashMap::new(),
            usenet_validation: true,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Source configured for a release group, compared case-insensitively.
    pub fn release_group_source(&self, group: &str) -> Option<QualitySource> {
        let lower = group.to_lowercase();
        self.release_group_sources
            .get(&lower)
            .or_else(|| {
                // Keys inserted directly into the public map may keep their case
                self.release_group_sources
                    .iter()
                    .find(|(key, _)| key.to_lowercase() == lower)
                    .map(|(_, source)| source)
            })
            .copied()
    }
}

#[cfg(feature = "serde")]
fn deserialize_group_sources<'de, D>(
    deserializer: D,
) -> Result<HashMap<String, QualitySource>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let sources = HashMap::<String, QualitySource>::deserialize(deserializer)?;
    Ok(sources
        .into_iter()
        .map(|(group, source)| (group.to_lowercase(), source))
        .collect())
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    default_language: Option<Language>,
    release_group_sources: HashMap<String, QualitySource>,
    usenet_validation: Option<bool>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language used when nothing is detected.
    pub fn default_language(mut self, language: Language) -> Self {
        self.default_language = Some(language);
        self
    }

    /// Map a release group to the source its releases come from.
    ///
    /// Only applied when no source token is present in the title.
    pub fn release_group_source(mut self, group: impl AsRef<str>, source: QualitySource) -> Self {
        self.release_group_sources
            .insert(group.as_ref().to_lowercase(), source);
        self
    }

    /// Set whether obfuscated Usenet names are rejected.
    ///
    /// Default: true
    pub fn usenet_validation(mut self, enabled: bool) -> Self {
        self.usenet_validation = Some(enabled);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            default_language: self.default_language.unwrap_or(Language::English),
            release_group_sources: self.release_group_sources,
            usenet_validation: self.usenet_validation.unwrap_or(true),
        }
    }
}
