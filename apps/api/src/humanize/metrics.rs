//! Text metrics used to size completion requests and normalize output length.

use regex::Regex;
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Counts the words in `text` via a word-boundary scan.
pub fn count_words(text: &str) -> usize {
    WORD_PATTERN.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words_simple_sentence() {
        assert_eq!(count_words("the quick brown fox"), 4);
    }

    #[test]
    fn test_count_words_punctuation_not_counted() {
        assert_eq!(count_words("Well, you know... it's fine!"), 6);
    }

    #[test]
    fn test_count_words_empty_text() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_count_words_whitespace_only() {
        assert_eq!(count_words("   \t\n  "), 0);
    }

    #[test]
    fn test_count_words_collapses_runs_of_whitespace() {
        assert_eq!(count_words("one   two\n\nthree"), 3);
    }

    #[test]
    fn test_count_words_numbers_count_as_words() {
        assert_eq!(count_words("chapter 42 begins"), 3);
    }
}
