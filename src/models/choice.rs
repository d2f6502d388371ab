use std::cmp::Ordering;
use std::fmt;

use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Raised when a named option (sex, activity level, preference, ...) does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub input: String,
    pub suggestion: Option<&'static str>,
}

impl fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {} '{}'", self.kind, self.input)?;
        if let Some(suggestion) = self.suggestion {
            write!(f, ", did you mean '{}'?", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseChoiceError {}

/// Lowercase and unify separators so `Extra-Active`, `extra_active` and
/// `extra active` all compare equal.
fn normalize(input: &str) -> String {
    input
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

/// Resolve `input` against a table of accepted spellings.
pub(crate) fn parse_choice<T: Copy>(
    kind: &'static str,
    input: &str,
    table: &[(&'static str, T)],
) -> Result<T, ParseChoiceError> {
    let key = normalize(input);

    if let Some((_, value)) = table.iter().find(|(name, _)| *name == key) {
        return Ok(*value);
    }

    let suggestion = table
        .iter()
        .map(|(name, _)| (*name, jaro_winkler(name, &key)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .map(|(name, _)| name);

    Err(ParseChoiceError {
        kind,
        input: input.to_string(),
        suggestion,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(&str, u8)] = &[("vegan", 1), ("vegetarian", 2), ("omnivore", 3)];

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert_eq!(parse_choice("diet", "VEGAN", TABLE), Ok(1));
        assert_eq!(parse_choice("diet", "  Omnivore ", TABLE), Ok(3));
    }

    #[test]
    fn test_typo_gets_suggestion() {
        let err = parse_choice("diet", "vegn", TABLE).unwrap_err();
        assert_eq!(err.suggestion, Some("vegan"));
        assert_eq!(err.to_string(), "Unknown diet 'vegn', did you mean 'vegan'?");
    }

    #[test]
    fn test_garbage_has_no_suggestion() {
        let err = parse_choice("diet", "xyz123", TABLE).unwrap_err();
        assert_eq!(err.suggestion, None);
        assert_eq!(err.to_string(), "Unknown diet 'xyz123'");
    }

    #[test]
    fn test_separators_are_normalized() {
        const LEVELS: &[(&str, u8)] = &[("extra_active", 5)];
        assert_eq!(parse_choice("level", "Extra-Active", LEVELS), Ok(5));
        assert_eq!(parse_choice("level", "extra active", LEVELS), Ok(5));
    }
}
