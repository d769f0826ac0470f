//! Release group detection.

use std::sync::LazyLock;

use fancy_regex::Regex as FancyRegex;
use regex::Regex;
use tracing::{debug, warn};

static RELEASE_GROUP: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(
        r"(?i)-(?<releasegroup>[a-z0-9]+(?!.+?(?:480p|720p|1080p|2160p)))(?<!WEB-DL)(?<!Blu-Ray)(?<!480p)(?<!720p)(?<!1080p)(?<!2160p)(?<!DTS-HD)(?<!DTS-X)(?<!DTS-MA)(?<!DTS-ES)(?:\b|[-._ ]|$)|[-._ ]\[(?<releasegroup2>[a-z0-9]+)\]$",
    )
    .unwrap()
});

static ANIME_RELEASE_GROUP: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"(?i)^(?:\[(?<subgroup>(?!\s).+?(?<!\s))\](?:_|-|\s|\.)?)").unwrap()
});

static INVALID_RELEASE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[se]\d+|[0-9a-f]{8})$").unwrap());

fn anime_group(title: &str) -> Option<String> {
    match ANIME_RELEASE_GROUP.captures(title) {
        Ok(caps) => caps
            .and_then(|caps| caps.name("subgroup"))
            .map(|m| m.as_str().to_string()),
        Err(err) => {
            warn!(error = %err, "Anime release group pattern failed");
            None
        }
    }
}

fn last_group(title: &str) -> Option<String> {
    let mut last = None;

    for caps in RELEASE_GROUP.captures_iter(title) {
        match caps {
            Ok(caps) => {
                last = caps
                    .name("releasegroup")
                    .or_else(|| caps.name("releasegroup2"))
                    .map(|m| m.as_str().to_string());
            }
            Err(err) => {
                warn!(error = %err, "Release group pattern failed");
                break;
            }
        }
    }

    last
}

/// Find the release group of a title.
///
/// A leading `[Subgroup]` wins. Otherwise the last `-GROUP` or trailing
/// `[GROUP]` is used, unless it is a number, an `S01`/`E01` token or an
/// eight digit hex hash.
pub fn parse_release_group(title: &str) -> Option<String> {
    debug!(title, "Trying to parse release group");

    if let Some(subgroup) = anime_group(title) {
        debug!(title, subgroup = %subgroup, "Matched anime subgroup");
        return Some(subgroup);
    }

    let Some(group) = last_group(title) else {
        debug!(title, "No release group found");
        return None;
    };

    if group.parse::<i64>().is_ok() {
        debug!(title, group = %group, "Release group parses to an integer, assuming it is invalid");
        return None;
    }

    if INVALID_RELEASE_GROUP.is_match(&group) {
        debug!(title, group = %group, "Release group looks like an episode token or hash");
        return None;
    }

    debug!(title, group = %group, "Matched release group");
    Some(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_group() {
        assert_eq!(
            parse_release_group("The.Show.S01E02.1080p.WEB-DL.x264-GROUP").as_deref(),
            Some("GROUP")
        );
        assert_eq!(
            parse_release_group("Movie.2010.1080p.BluRay.REMUX.AVC.DTS-HD.MA.5.1-C0M3T").as_deref(),
            Some("C0M3T")
        );
    }

    #[test]
    fn test_last_group_wins() {
        assert_eq!(
            parse_release_group("Title.2010.DVDRip.x264-HANDJOB-BUYMORE").as_deref(),
            Some("BUYMORE")
        );
    }

    #[test]
    fn test_bracketed_trailing_group() {
        assert_eq!(
            parse_release_group("Show S01E01 720p HDTV [GRP]").as_deref(),
            Some("GRP")
        );
    }

    #[test]
    fn test_anime_subgroup() {
        assert_eq!(
            parse_release_group("[SubsPlease] Anime - 14 (1080p) [3168B4D7].mkv").as_deref(),
            Some("SubsPlease")
        );
    }

    #[test]
    fn test_quality_tags_are_not_groups() {
        assert_eq!(parse_release_group("Show.S01E01.1080p.WEB-DL"), None);
        assert_eq!(parse_release_group("Movie.2010.Blu-Ray.1080p"), None);
    }

    #[test]
    fn test_invalid_groups() {
        assert_eq!(parse_release_group("Show.2010-2012"), None);
        assert_eq!(parse_release_group("Show-S01"), None);
        assert_eq!(parse_release_group("Show-E05"), None);
        assert_eq!(parse_release_group("Show-abcd1234"), None);
    }
}
