//! Input clean-up applied before the title grammar runs.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::registry::is_removable_extension;

static WEBSITE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\[\s*[-a-z]+(?:\.[a-z]+)+\s*\][- ]*|^www\.[a-z]+\.(?:com|net|org)[ -]*")
        .unwrap()
});

static WEBSITE_POSTFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[\s*[-a-z]+(?:\.[a-z0-9]+)+\s*\]$").unwrap());

static FILE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.[a-z0-9]{2,4}$").unwrap());

static SIMPLE_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:(?:480|720|1080|2160)[ip]|[xh][\W_]?26[45]|DD\W?5\W1|[<>?*]|848x480|1280x720|1920x1080|3840x2160|4096x2160|\b(?:8|10)b(?:it)?\b|\b10-bit\b)\s*?").unwrap()
});

/// A literal rewrite applied before parsing.
struct Substitution {
    regex: Regex,
    replacement: &'static str,
}

impl Substitution {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

static PRE_SUBSTITUTIONS: LazyLock<Vec<Substitution>> = LazyLock::new(|| {
    vec![
        // Korean series without a season number, airdate dropped
        Substitution::new(r"\.E(\d{2,4})\.\d{6}\.(.*-NEXT)$", ".S01E${1}.${2}"),
        // LoliHouse/ZERO/Lilith-Raws put the title outside of brackets
        Substitution::new(
            r"^\[(?<subgroup>[^\]]*?(?:LoliHouse|ZERO|Lilith-Raws)[^\]]*?)\](?<title>[^\[\]]+?)(?: - (?<episode>[0-9-]+)\s*|\[第?(?<episode2>[0-9]+(?:-[0-9]+)?)话?(?:END|完)?\])\[",
            "[${subgroup}][${title}][${episode}${episode2}][",
        ),
        // Chinese releases with extra brackets around title and episode
        Substitution::new(
            r"^\[(?<subgroup>[^\]]+)\](?:\s?★[^\[ -]+\s?)?\[?(?:(?<chinesetitle>[^\]]*?[\x{4E00}-\x{9FCC}][^\]]*?)(?:\]\[|\s*[_/·]\s*))?(?<title>[^\]]+?)\]?(?:\[\d{4}\])?\[第?(?<episode>[0-9]+(?:-[0-9]+)?)话?(?:END|完)?\]",
            "[${subgroup}] ${title} - ${episode} ",
        ),
        // Chinese and English title separated by a slash
        Substitution::new(
            r"^\[(?<subgroup>[^\]]+)\](?:\s)(?:(?<chinesetitle>[^\]]*?[\x{4E00}-\x{9FCC}][^\]]*?)(?:\s/\s))(?<title>[^\]]+?)(?:[- ]+)(?<episode>[0-9]+(?:-[0-9]+)?)话?(?:END|完)?",
            "[${subgroup}] ${title} - ${episode} ",
        ),
    ]
});

/// Trim and strip website tags. The result is the release's full title.
pub fn strip_website(input: &str) -> String {
    let trimmed = input.trim();
    let without_prefix = WEBSITE_PREFIX.replace(trimmed, "");
    WEBSITE_POSTFIX.replace(&without_prefix, "").into_owned()
}

/// Drop a trailing media or Usenet file extension; unknown extensions stay.
pub fn remove_file_extension(title: &str) -> String {
    FILE_EXTENSION
        .replace(title, |caps: &Captures| {
            let extension = &caps[0];
            if is_removable_extension(extension) {
                String::new()
            } else {
                extension.to_string()
            }
        })
        .into_owned()
}

/// Replace CJK lenticular brackets with square brackets.
pub fn normalize_brackets(title: &str) -> String {
    title.replace('【', "[").replace('】', "]")
}

/// Apply the ordered pre-substitutions; every one that matches is applied.
pub fn pre_substitute(title: &str) -> String {
    let mut result = title.to_string();

    for substitution in PRE_SUBSTITUTIONS.iter() {
        if substitution.regex.is_match(&result) {
            result = substitution
                .regex
                .replace(&result, substitution.replacement)
                .into_owned();
            debug!(title = %result, "Substituted release title");
        }
    }

    result
}

/// Remove resolution and codec noise that confuses the title grammar.
pub fn simple_title(title: &str) -> String {
    SIMPLE_TITLE.replace_all(title, "").into_owned()
}
