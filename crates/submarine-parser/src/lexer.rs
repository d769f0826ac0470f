//! Logos-based lexer for numbered title spans.
//!
//! Regex engines only report the last iteration of a repeated capture group,
//! so the title grammar wraps repeated number sections in a single named span
//! (`episodes`, `absoluteepisodes`, `seasonepisodes`, `joinedepisodes`). The
//! functions here re-lex such a span and recover every number in order.
//!
//! Offsets returned are relative to the start of the span.

use logos::Logos;
use std::ops::Range;

/// Tokens found inside a numbered span.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[^0-9A-Za-z.\-]+")]
pub enum SpanToken {
    /// A run of ASCII digits
    #[regex(r"[0-9]+")]
    Number,

    /// Episode marker (`e`, `ee`, `ep`, `x`, `xx`)
    #[regex(r"(?i)(?:e{1,2}p?|x{1,2})", priority = 3)]
    Marker,

    /// Any other run of letters, e.g. `S` or `Part`
    #[regex(r"[A-Za-z]+", priority = 1)]
    Word,

    #[token("-")]
    Dash,

    #[token(".")]
    Dot,
}

/// Role of a number inside a season/episode span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRole {
    Season,
    Episode,
}

/// A number recovered from a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanNumber<'a> {
    pub offset: usize,
    pub text: &'a str,
}

fn tokenize(span: &str) -> Vec<(SpanToken, Range<usize>)> {
    SpanToken::lexer(span)
        .spanned()
        .filter_map(|(token, range)| token.ok().map(|t| (t, range)))
        .collect()
}

/// Every integer in the span.
pub fn numbers(span: &str) -> Vec<SpanNumber<'_>> {
    tokenize(span)
        .into_iter()
        .filter(|(token, _)| *token == SpanToken::Number)
        .map(|(_, range)| SpanNumber {
            offset: range.start,
            text: &span[range],
        })
        .collect()
}

/// Every integer or decimal (`12.5`) in the span.
pub fn decimals(span: &str) -> Vec<SpanNumber<'_>> {
    let tokens = tokenize(span);
    let mut result = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let (token, range) = (tokens[i].0, tokens[i].1.clone());
        if token != SpanToken::Number {
            i += 1;
            continue;
        }

        let mut end = range.end;
        // Number Dot Number with no gaps is a single decimal
        if let (Some((SpanToken::Dot, dot)), Some((SpanToken::Number, fraction))) =
            (tokens.get(i + 1), tokens.get(i + 2))
        {
            if dot.start == end && fraction.start == dot.end {
                end = fraction.end;
                i += 2;
            }
        }

        result.push(SpanNumber {
            offset: range.start,
            text: &span[range.start..end],
        });
        i += 1;
    }

    result
}

/// Numbers of a repeated season/episode block such as `S01E05E06.S01E07`
/// or `1x05 - 1x06`.
///
/// A number preceded by an episode marker is an episode. A number followed by
/// a marker starts a new block and is a season. A bare number after a dash
/// continues the previous block as an episode. Anything else is a season.
pub fn season_episodes(span: &str) -> Vec<(NumberRole, SpanNumber<'_>)> {
    let tokens = tokenize(span);
    let mut result: Vec<(NumberRole, SpanNumber<'_>)> = Vec::new();

    for (i, (token, range)) in tokens.iter().enumerate() {
        if *token != SpanToken::Number {
            continue;
        }

        let previous = i.checked_sub(1).map(|p| tokens[p].0);
        let next = tokens.get(i + 1).map(|(t, _)| *t);

        let role = if previous == Some(SpanToken::Marker) {
            NumberRole::Episode
        } else if next == Some(SpanToken::Marker) {
            NumberRole::Season
        } else if previous == Some(SpanToken::Dash) && !result.is_empty() {
            NumberRole::Episode
        } else {
            NumberRole::Season
        };

        result.push((
            role,
            SpanNumber {
                offset: range.start,
                text: &span[range.clone()],
            },
        ));
    }

    result
}

/// Season and episode pairs written without a separator (`103`, `1103`).
///
/// The last two digits of each chunk are the episode. Runs whose length is a
/// multiple of four are split into four digit chunks first.
pub fn joined_episodes(span: &str) -> Vec<(SpanNumber<'_>, SpanNumber<'_>)> {
    let mut result = Vec::new();

    for number in numbers(span) {
        let text = number.text;
        let chunk = if text.len() > 4 && text.len() % 4 == 0 {
            4
        } else {
            text.len()
        };
        if chunk < 3 {
            continue;
        }

        for start in (0..text.len()).step_by(chunk) {
            let piece = &text[start..start + chunk];
            let split = piece.len() - 2;
            let offset = number.offset + start;
            result.push((
                SpanNumber {
                    offset,
                    text: &piece[..split],
                },
                SpanNumber {
                    offset: offset + split,
                    text: &piece[split..],
                },
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(numbers: &[SpanNumber<'a>]) -> Vec<&'a str> {
        numbers.iter().map(|n| n.text).collect()
    }

    #[test]
    fn test_numbers_in_episode_span() {
        let found = numbers("E05-E06E07");
        assert_eq!(texts(&found), vec!["05", "06", "07"]);
        assert_eq!(found[1].offset, 5);
    }

    #[test]
    fn test_numbers_skip_words() {
        assert_eq!(texts(&numbers(" Part01 Part 02")), vec!["01", "02"]);
    }

    #[test]
    fn test_decimals() {
        assert_eq!(texts(&decimals(" 12.5")), vec!["12.5"]);
        assert_eq!(texts(&decimals(" - 01 - 02")), vec!["01", "02"]);
        assert_eq!(texts(&decimals(".101.5")), vec!["101.5"]);
        assert_eq!(texts(&decimals(" ep01 ep02")), vec!["01", "02"]);
    }

    #[test]
    fn test_season_episodes_with_markers() {
        let found = season_episodes("S01E05E06 S01E07");
        let roles: Vec<_> = found.iter().map(|(r, n)| (*r, n.text)).collect();
        assert_eq!(
            roles,
            vec![
                (NumberRole::Season, "01"),
                (NumberRole::Episode, "05"),
                (NumberRole::Episode, "06"),
                (NumberRole::Season, "01"),
                (NumberRole::Episode, "07"),
            ]
        );
    }

    #[test]
    fn test_season_episodes_x_notation() {
        let found = season_episodes(" 1x05 - 1x06");
        let roles: Vec<_> = found.iter().map(|(r, n)| (*r, n.text)).collect();
        assert_eq!(
            roles,
            vec![
                (NumberRole::Season, "1"),
                (NumberRole::Episode, "05"),
                (NumberRole::Season, "1"),
                (NumberRole::Episode, "06"),
            ]
        );
    }

    #[test]
    fn test_season_episodes_dash_continuation() {
        let found = season_episodes(" S01E1-2");
        let roles: Vec<_> = found.iter().map(|(r, _)| *r).collect();
        assert_eq!(
            roles,
            vec![NumberRole::Season, NumberRole::Episode, NumberRole::Episode]
        );
    }

    #[test]
    fn test_joined_episodes() {
        let found = joined_episodes(".103.104");
        let pairs: Vec<_> = found.iter().map(|(s, e)| (s.text, e.text)).collect();
        assert_eq!(pairs, vec![("1", "03"), ("1", "04")]);

        let found = joined_episodes(".1103");
        assert_eq!(found[0].0.text, "11");
        assert_eq!(found[0].1.text, "03");
        assert_eq!(found[0].1.offset, 3);
    }

    #[test]
    fn test_joined_episodes_four_digit_chunks() {
        let found = joined_episodes("11031104");
        let pairs: Vec<_> = found.iter().map(|(s, e)| (s.text, e.text)).collect();
        assert_eq!(pairs, vec![("11", "03"), ("11", "04")]);
    }
}
