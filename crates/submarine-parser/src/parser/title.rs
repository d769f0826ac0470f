//! Title grammar: turns a cleaned release title into [`TitleMetadata`].

use chrono::NaiveDate;
use fancy_regex::{Captures, Regex as FancyRegex};
use tracing::{debug, warn};

use super::patterns::{
    ALTERNATIVE_TITLE, BRACKETED_ALTERNATIVE_TITLE, MOVIE_PATTERNS, SERIES_INFORMATION,
    SERIES_PATTERNS,
};
use crate::lexer::{self, NumberRole};
use crate::model::{MovieTitleMetadata, SeriesTitleMetadata, TitleMetadata};
use crate::util::{is_not_blank, normalize_release_title, to_decimal, to_integer};
use crate::{ParseError, Result};

/// Literal that looks like a hash but is a resolution.
const RESOLUTION_HASH: &str = "1280x720";

/// Parse the title, aliases and numbering of a cleaned release title.
pub fn parse_title(input: &str) -> Result<TitleMetadata> {
    let unbracketed = BRACKETED_ALTERNATIVE_TITLE
        .try_replacen(input, 1, "${1} AKA ${2}")
        .map(|title| title.into_owned())
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to unbracket alternative title");
            input.to_string()
        });

    let mut titles = split_alternative_titles(&unbracketed);
    let parsable = titles
        .pop()
        .ok_or_else(|| ParseError::not_parsable("title is empty"))?;
    let aliases: Vec<String> = titles
        .iter()
        .map(|alias| normalize_release_title(alias))
        .collect();

    let has_series_information = SERIES_INFORMATION.is_match(&parsable).unwrap_or(false);

    if !has_series_information {
        for pattern in MOVIE_PATTERNS.iter() {
            if let Some(movie) = match_movie(pattern, &parsable, &aliases) {
                return Ok(TitleMetadata::Movie(movie));
            }
        }
    }

    for pattern in SERIES_PATTERNS.iter() {
        if let Some(series) = match_series(pattern, &parsable, &aliases)? {
            return Ok(TitleMetadata::Series(series));
        }
    }

    Err(ParseError::not_parsable("does not match any regex"))
}

/// Turn dots into spaces, except between digits (`12.5`).
fn dots_to_spaces(part: &str) -> String {
    let chars: Vec<char> = part.chars().collect();
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let decimal = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
            if c == '.' && !decimal {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Split on `AKA`, dropping blank parts and turning dots into spaces.
fn split_alternative_titles(title: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut last = 0;

    for found in ALTERNATIVE_TITLE.find_iter(title) {
        match found {
            Ok(separator) => {
                parts.push(&title[last..separator.start()]);
                last = separator.end();
            }
            Err(err) => {
                warn!(error = %err, "Failed to split alternative titles");
                break;
            }
        }
    }
    parts.push(&title[last..]);

    parts
        .into_iter()
        .filter(|part| is_not_blank(part))
        .map(dots_to_spaces)
        .collect()
}

/// Iterate the matches of a pattern, stopping at the first engine error.
fn matches<'r, 't>(
    pattern: &'r FancyRegex,
    title: &'t str,
) -> impl Iterator<Item = Captures<'t>> + 'r
where
    't: 'r,
{
    pattern.captures_iter(title).map_while(move |caps| match caps {
        Ok(caps) => Some(caps),
        Err(err) => {
            warn!(pattern = pattern.as_str(), error = %err, "Title pattern failed");
            None
        }
    })
}

fn named<'t>(caps: &Captures<'t>, name: &str) -> Option<&'t str> {
    caps.name(name)
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty())
}

fn match_hash(caps: &Captures<'_>) -> Option<String> {
    named(caps, "hash")
        .map(|hash| hash.trim_matches(['[', ']']))
        .filter(|hash| *hash != RESOLUTION_HASH)
        .map(str::to_string)
}

fn four_digit_year(value: Option<&str>) -> Option<u16> {
    value
        .map(|year| year.trim_matches(|c: char| c == '[' || c == ']' || c == ' '))
        .filter(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|year| year.parse().ok())
}

fn match_movie(
    pattern: &FancyRegex,
    title: &str,
    aliases: &[String],
) -> Option<MovieTitleMetadata> {
    for caps in matches(pattern, title) {
        let Some(main_title) = named(&caps, "title").filter(|t| is_not_blank(t)) else {
            continue;
        };

        return Some(MovieTitleMetadata {
            main_title: normalize_release_title(main_title),
            aliases: aliases.to_vec(),
            year: four_digit_year(named(&caps, "year")),
            group: named(&caps, "subgroup").map(str::to_string),
            hash: match_hash(&caps),
            edition: named(&caps, "edition")
                .map(str::trim)
                .filter(|edition| !edition.is_empty())
                .map(str::to_string),
        });
    }

    None
}

/// Numbers captured by a series pattern, with absolute offsets in the title.
#[derive(Debug, Default)]
struct Numbering<'t> {
    seasons: Vec<(usize, &'t str)>,
    episodes: Vec<(usize, &'t str)>,
    absolute_episodes: Vec<(usize, &'t str)>,
}

impl<'t> Numbering<'t> {
    fn collect(pattern: &FancyRegex, caps: &Captures<'t>) -> Self {
        let mut numbering = Numbering::default();

        for name in pattern.capture_names().flatten() {
            let Some(found) = caps.name(name).filter(|m| !m.as_str().is_empty()) else {
                continue;
            };
            let (start, span) = (found.start(), found.as_str());

            match name.trim_end_matches(|c: char| c.is_ascii_digit()) {
                "season" => numbering.seasons.push((start, span)),
                "episode" => numbering.episodes.push((start, span)),
                "absoluteepisode" => numbering.absolute_episodes.push((start, span)),
                "episodes" => numbering.episodes.extend(
                    lexer::numbers(span)
                        .into_iter()
                        .map(|n| (start + n.offset, n.text)),
                ),
                "absoluteepisodes" => numbering.absolute_episodes.extend(
                    lexer::decimals(span)
                        .into_iter()
                        .map(|n| (start + n.offset, n.text)),
                ),
                "seasonepisodes" => {
                    for (role, n) in lexer::season_episodes(span) {
                        let value = (start + n.offset, n.text);
                        match role {
                            NumberRole::Season => numbering.seasons.push(value),
                            NumberRole::Episode => numbering.episodes.push(value),
                        }
                    }
                }
                "joinedepisodes" => {
                    for (season, episode) in lexer::joined_episodes(span) {
                        numbering.seasons.push((start + season.offset, season.text));
                        numbering.episodes.push((start + episode.offset, episode.text));
                    }
                }
                _ => {}
            }
        }

        numbering.seasons.sort_by_key(|(offset, _)| *offset);
        numbering.episodes.sort_by_key(|(offset, _)| *offset);
        numbering.absolute_episodes.sort_by_key(|(offset, _)| *offset);
        numbering
    }
}

fn first_and_last<'a, T>(values: &'a [(usize, T)]) -> Option<(&'a T, &'a T)> {
    Some((&values.first()?.1, &values.last()?.1))
}

fn match_series(
    pattern: &FancyRegex,
    title: &str,
    aliases: &[String],
) -> Result<Option<SeriesTitleMetadata>> {
    for caps in matches(pattern, title) {
        let Some(main_title) = named(&caps, "title").filter(|t| is_not_blank(t)) else {
            continue;
        };

        let numbering = Numbering::collect(pattern, &caps);
        let mut series = SeriesTitleMetadata {
            main_title: normalize_release_title(main_title),
            aliases: aliases.to_vec(),
            year: four_digit_year(named(&caps, "titleyear")),
            group: named(&caps, "subgroup").map(str::to_string),
            hash: match_hash(&caps),
            air_date: air_date(&caps),
            ..Default::default()
        };

        if let Some((first, last)) = first_and_last(&numbering.seasons) {
            let (first, last) = (to_integer(first)?, to_integer(last)?);
            series.seasons = if first == last {
                vec![first]
            } else {
                vec![first, last]
            };
        }

        if let Some((first, last)) = first_and_last(&numbering.episodes) {
            let (first, last) = (to_integer(first)?, to_integer(last)?);
            if first > last {
                return Err(ParseError::invalid_release(
                    "first episode is greater than last one (invalid release or multiple seasons maybe?)",
                ));
            }
            series.episodes = (first..=last).collect();
        }

        if let Some((first, last)) = first_and_last(&numbering.absolute_episodes) {
            let (first, last) = (to_decimal(first)?, to_decimal(last)?);
            if first > last {
                return Err(ParseError::invalid_release(
                    "first absolute episode is greater than last one (invalid release or multiple seasons maybe?)",
                ));
            }

            if first.fract() != 0.0 || last.fract() != 0.0 {
                if numbering.absolute_episodes.len() != 1 {
                    return Err(ParseError::invalid_release(
                        "multiple matches not allowed for specials",
                    ));
                }
                series.special_absolute_episodes = vec![first];
                series.special = true;
            } else {
                series.absolute_episodes = (first as u32..=last as u32).collect();
                series.special = named(&caps, "special").is_some();
            }
        }

        return Ok(Some(series));
    }

    Ok(None)
}

fn air_date(caps: &Captures<'_>) -> Option<NaiveDate> {
    let year = named(caps, "airyear")?;
    let month = named(caps, "airmonth")?;
    let day = named(caps, "airday")?;

    let date = match (year.parse::<i32>(), to_integer(month), to_integer(day)) {
        (Ok(year), Ok(month), Ok(day)) => NaiveDate::from_ymd_opt(year, month, day),
        _ => None,
    };
    if date.is_none() {
        debug!(year, month, day, "Ignoring invalid air date");
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn series(input: &str) -> SeriesTitleMetadata {
        match parse_title(input).unwrap() {
            TitleMetadata::Series(series) => series,
            other => panic!("expected series for {input}, got {other:?}"),
        }
    }

    fn movie(input: &str) -> MovieTitleMetadata {
        match parse_title(input).unwrap() {
            TitleMetadata::Movie(movie) => movie,
            other => panic!("expected movie for {input}, got {other:?}"),
        }
    }

    #[test]
    fn test_single_episode() {
        let parsed = series("The.Show.S01E02..WEB-DL.-GROUP");
        assert_eq!(parsed.main_title, "The Show");
        assert_eq!(parsed.seasons, vec![1]);
        assert_eq!(parsed.episodes, vec![2]);
        assert!(parsed.absolute_episodes.is_empty());
    }

    #[test]
    fn test_episode_range() {
        let parsed = series("Show.S01E01-E03..HDTV");
        assert_eq!(parsed.main_title, "Show");
        assert_eq!(parsed.seasons, vec![1]);
        assert_eq!(parsed.episodes, vec![1, 2, 3]);
    }

    #[test]
    fn test_reversed_episode_range_is_invalid() {
        assert_matches!(
            parse_title("Show.S01E05-E03..HDTV"),
            Err(ParseError::InvalidRelease(_))
        );
    }

    #[test]
    fn test_full_season() {
        let parsed = series("Show.S02..BluRay-GRP");
        assert_eq!(parsed.main_title, "Show");
        assert_eq!(parsed.seasons, vec![2]);
        assert!(parsed.episodes.is_empty());
    }

    #[test]
    fn test_multi_season_pack() {
        let parsed = series("Show.S01-S03..BluRay-GRP");
        assert_eq!(parsed.main_title, "Show");
        assert_eq!(parsed.seasons, vec![1, 3]);
    }

    #[test]
    fn test_anime_absolute_episode() {
        let parsed = series("[SubsPlease] Anime - 14 () [3168B4D7]");
        assert_eq!(parsed.main_title, "Anime");
        assert_eq!(parsed.group.as_deref(), Some("SubsPlease"));
        assert_eq!(parsed.hash.as_deref(), Some("3168B4D7"));
        assert_eq!(parsed.absolute_episodes, vec![14]);
        assert!(parsed.seasons.is_empty());
    }

    #[test]
    fn test_anime_batch_range() {
        let parsed = series("[Erai-raws] Anime - 01 ~ 24 [BD 720p][Multiple Subtitle]");
        assert_eq!(parsed.main_title, "Anime");
        assert_eq!(parsed.absolute_episodes, (1..=24).collect::<Vec<_>>());
    }

    #[test]
    fn test_fractional_special() {
        let parsed = series("[Group] Anime - 12.5 [ABCD1234]");
        assert_eq!(parsed.special_absolute_episodes, vec![12.5]);
        assert!(parsed.special);
        assert!(parsed.absolute_episodes.is_empty());
    }

    #[test]
    fn test_daily_air_date() {
        let parsed = series("Daily.Show.2023.10.12.Guest.S05E10.Name");
        assert_eq!(parsed.main_title, "Daily Show");
        assert_eq!(parsed.air_date, NaiveDate::from_ymd_opt(2023, 10, 12));
        assert_eq!(parsed.seasons, vec![5]);
        assert_eq!(parsed.episodes, vec![10]);
    }

    #[test]
    fn test_movie_with_year() {
        let parsed = movie("The.Matrix.1999..BluRay.-GROUP");
        assert_eq!(parsed.main_title, "The Matrix");
        assert_eq!(parsed.year, Some(1999));
    }

    #[test]
    fn test_movie_edition() {
        let parsed = movie("Movie.Title.Directors.Cut.2011..BluRay-GRP");
        assert_eq!(parsed.main_title, "Movie Title");
        assert_eq!(parsed.edition.as_deref(), Some("Directors Cut"));
        assert_eq!(parsed.year, Some(2011));
    }

    #[test]
    fn test_resolution_is_not_a_hash() {
        let parsed = movie("[Group] Anime Title [720p][1280x720]");
        assert_eq!(parsed.main_title, "Anime Title");
        assert_eq!(parsed.group.as_deref(), Some("Group"));
        assert_eq!(parsed.hash, None);

        let parsed = movie("[Group] Anime Title [720p][ABCD1234]");
        assert_eq!(parsed.hash.as_deref(), Some("ABCD1234"));
    }

    #[test]
    fn test_part_as_word() {
        let parsed = series("Mini.Series.Part.One..HDTV.-GRP");
        assert_eq!(parsed.main_title, "Mini Series");
        assert_eq!(parsed.episodes, vec![1]);
        assert!(parsed.seasons.is_empty());

        let parsed = series("Mini.Series.Part.Nine..HDTV.-GRP");
        assert_eq!(parsed.episodes, vec![9]);
    }

    #[test]
    fn test_aka_aliases() {
        let parsed = parse_title("Title One AKA Title Two AKA Title Three S04  WEB-DL").unwrap();
        assert_eq!(parsed.main_title(), "Title Three");
        assert_eq!(parsed.aliases(), ["Title One", "Title Two"]);
    }

    #[test]
    fn test_bracketed_aka() {
        let parsed = parse_title("Movie Name (AKA Other Name) 2010 DVDRip").unwrap();
        assert_eq!(parsed.aliases(), ["Movie Name"]);
    }

    #[test]
    fn test_dots_between_digits_are_kept() {
        assert_eq!(dots_to_spaces("Anime.-.12.5.[ABCD1234]"), "Anime - 12.5 [ABCD1234]");
        assert_eq!(dots_to_spaces("The.Show.2010."), "The Show 2010 ");
    }

    #[test]
    fn test_not_parsable() {
        assert_matches!(parse_title("justoneword"), Err(ParseError::NotParsable(_)));
        assert_matches!(parse_title(" AKA "), Err(ParseError::NotParsable(_)));
    }
}
