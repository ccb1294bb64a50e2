//! Capturing split of raw text into word, punctuation, and whitespace tokens.

use std::sync::OnceLock;

use regex::Regex;

/// Matches a single punctuation delimiter, the literal `--`, or a whitespace run.
///
/// `--` is listed first so a double hyphen is consumed as one token rather than
/// falling through to the character class.
const DELIMITER_PATTERN: &str = r#"--|[,.!?():;_'"]|\s+"#;

fn delimiter_regex() -> &'static Regex {
    static DELIMITERS: OnceLock<Regex> = OnceLock::new();
    DELIMITERS.get_or_init(|| Regex::new(DELIMITER_PATTERN).expect("delimiter pattern is valid"))
}

/// Splits `text` into an ordered sequence of tokens, keeping every delimiter.
///
/// Each delimiter match becomes its own token, and the residual segment before
/// each match (and after the last one) is emitted as well, even when empty.
/// Adjacent delimiters therefore produce empty-string tokens. Concatenating
/// the returned slice in order reproduces `text` exactly; no case folding or
/// trimming is applied.
///
/// ```
/// use minitok::split;
///
/// assert_eq!(split("a, b."), vec!["a", ",", "", " ", "b", ".", ""]);
/// ```
#[must_use]
pub fn split(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut cursor = 0;
    for matched in delimiter_regex().find_iter(text) {
        tokens.push(&text[cursor..matched.start()]);
        tokens.push(matched.as_str());
        cursor = matched.end();
    }
    tokens.push(&text[cursor..]);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_punctuation_and_whitespace_with_empty_segments() {
        assert_eq!(split("a, b."), vec!["a", ",", "", " ", "b", ".", ""]);
    }

    #[test]
    fn double_hyphen_is_a_single_token() {
        assert_eq!(split("yes--no"), vec!["yes", "--", "no"]);
    }

    #[test]
    fn single_hyphen_is_not_a_delimiter() {
        assert_eq!(split("well-known"), vec!["well-known"]);
    }

    #[test]
    fn whitespace_runs_stay_together() {
        assert_eq!(split("a  \t b"), vec!["a", "  \t ", "b"]);
    }

    #[test]
    fn empty_input_yields_single_empty_token() {
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn adjacent_delimiters_produce_empty_tokens() {
        assert_eq!(split("!?"), vec!["", "!", "", "?", ""]);
    }

    #[test]
    fn concatenation_round_trips_the_input() {
        for text in [
            "She said: \"wait -- no, don't!\"",
            "(a_b); c.d",
            "  leading and trailing  ",
            "--",
            "plain",
        ] {
            assert_eq!(split(text).concat(), text);
        }
    }
}
