//! Small string helpers shared by the parsers.

use crate::{ParseError, Result};

const NUMBER_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Fold full-width digits (U+FF10..U+FF19) to ASCII.
fn fold_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{FF10}'..='\u{FF19}' => {
                char::from_u32(c as u32 - 0xFF10 + '0' as u32).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Parse a number token. Accepts digit strings and the words `zero` to `nine`.
pub fn to_integer(s: &str) -> Result<u32> {
    let folded = fold_digits(s.trim());
    if let Ok(number) = folded.parse::<u32>() {
        return Ok(number);
    }

    let lower = folded.to_lowercase();
    NUMBER_WORDS
        .iter()
        .position(|word| *word == lower)
        .map(|index| index as u32)
        .ok_or_else(|| ParseError::format(format!("{} isn't a number", s)))
}

/// Parse a decimal token such as `12.5`.
pub fn to_decimal(s: &str) -> Result<f64> {
    let folded = fold_digits(s.trim());
    folded
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ParseError::format(format!("{} isn't a number", s)))
}

/// Reverse a string by characters.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Replace dots and underscores with spaces and trim.
pub fn normalize_release_title(s: &str) -> String {
    s.replace(['.', '_'], " ").trim().to_string()
}

/// Whether a string is something other than whitespace.
pub fn is_not_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_to_integer() {
        assert_eq!(to_integer("01").unwrap(), 1);
        assert_eq!(to_integer("1103").unwrap(), 1103);
        assert_eq!(to_integer("Two").unwrap(), 2);
        assert_eq!(to_integer("\u{FF11}\u{FF12}").unwrap(), 12);
        assert_matches!(to_integer("eleven"), Err(ParseError::Format(_)));
        assert_matches!(to_integer(""), Err(ParseError::Format(_)));
    }

    #[test]
    fn test_to_decimal() {
        assert_eq!(to_decimal("12.5").unwrap(), 12.5);
        assert_eq!(to_decimal("7").unwrap(), 7.0);
        assert_matches!(to_decimal("v2"), Err(ParseError::Format(_)));
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse("p0801.10E10S"), "S01E01.1080p");
        assert_eq!(reverse(""), "");
    }

    #[test]
    fn test_normalize_release_title() {
        assert_eq!(normalize_release_title(" The.Show_Name. "), "The Show Name");
    }
}
