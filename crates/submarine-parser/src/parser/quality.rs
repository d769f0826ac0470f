//! Source, resolution and revision detection.

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use tracing::warn;

use crate::model::{QualityModel, QualityResolutionModel, Revision};
use crate::registry::{QUALITY_RESOLUTIONS, QUALITY_SOURCES};

static PROPER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bproper\b").unwrap());

static REPACK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:repack|rerip)\d?\b").unwrap());

// Upper case only, `real` is an ordinary word in titles
static REAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bREAL\b").unwrap());

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:\d[-_. ]?|\b)v(?<version>\d{1,2})\b|\b(?:repack|rerip)(?<repack>\d)\b")
        .unwrap()
});

fn first_match<T: Copy>(table: &[(T, FancyRegex)], title: &str) -> Option<T> {
    table.iter().find_map(|(value, regex)| match regex.is_match(title) {
        Ok(true) => Some(*value),
        Ok(false) => None,
        Err(err) => {
            warn!(pattern = regex.as_str(), error = %err, "Quality pattern failed");
            None
        }
    })
}

fn parse_revision(title: &str) -> Revision {
    let mut revision = Revision {
        is_proper: PROPER.is_match(title),
        is_repack: REPACK.is_match(title),
        is_real: REAL.is_match(title),
        ..Revision::default()
    };

    if let Some(caps) = VERSION.captures(title) {
        let version = caps
            .name("version")
            .or_else(|| caps.name("repack"))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .filter(|version| *version > 0);
        if let Some(version) = version {
            revision.version = version;
        }
    }

    revision
}

/// Detect the quality of a release title. Never fails; unknown parts stay default.
pub fn parse_quality(title: &str) -> QualityModel {
    let source = first_match(&QUALITY_SOURCES, title).unwrap_or_default();
    let resolution = first_match(&QUALITY_RESOLUTIONS, title);

    QualityModel {
        resolution: QualityResolutionModel::new(source, resolution),
        revision: parse_revision(title),
    }
}
