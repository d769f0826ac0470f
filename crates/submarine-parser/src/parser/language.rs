//! Language detection.

use crate::model::Language;
use crate::registry::LANGUAGES;

/// Detect every language mentioned in a title, in table order.
///
/// Returns `[default_language]` when nothing matches, so the result is never empty.
pub fn parse_languages(title: &str, default_language: Language) -> Vec<Language> {
    let languages: Vec<Language> = LANGUAGES
        .iter()
        .filter(|(_, regex)| regex.is_match(title))
        .map(|(language, _)| *language)
        .collect();

    if languages.is_empty() {
        vec![default_language]
    } else {
        languages
    }
}
