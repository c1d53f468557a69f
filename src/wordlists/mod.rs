//! Word lists for anagram search
//!
//! Provides the embedded dictionary and file-backed word sources.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{EmbeddedWords, FileWords, LoadError, WordList, WordSource, source_from_name};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_trimmed_lowercase() {
        for &word in WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_have_no_comment_lines() {
        assert!(WORDS.iter().all(|word| !word.starts_with('#')));
    }

    #[test]
    fn dictionary_is_sorted() {
        assert!(WORDS.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
