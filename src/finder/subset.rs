//! Letter-availability filter
//!
//! Finds every dictionary word that can be spelled from a pool of letters,
//! using each pool letter at most as often as it appears.

use crate::core::LetterCounts;
use log::debug;

/// Minimum length of a word accepted by [`find_subset_words`]
///
/// Single characters are never results, even when the pool contains them.
pub const MIN_WORD_LEN: usize = 2;

/// Find all words of `source` that can be formed from `letters`
///
/// A word is accepted when it has at least [`MIN_WORD_LEN`] characters, is no
/// longer than `letters`, and uses no character more often than `letters`
/// supplies it. Comparison ignores case; accepted words are returned in
/// lowercase, in source order.
///
/// # Examples
/// ```
/// use anagram_finder::finder::find_subset_words;
///
/// let found = find_subset_words("abc", ["a", "ab", "abcd", "ba"]);
/// assert_eq!(found, vec!["ab", "ba"]);
///
/// let found = find_subset_words("aab", ["aa", "aab", "aabb"]);
/// assert_eq!(found, vec!["aa", "aab"]);
/// ```
pub fn find_subset_words<I, S>(letters: &str, source: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let available = LetterCounts::new(letters);
    let max_len = available.total();

    let mut scanned = 0usize;
    let found: Vec<String> = source
        .into_iter()
        .inspect(|_| scanned += 1)
        .filter_map(|word| {
            let word = word.as_ref();
            let len = word.chars().count();

            if len < MIN_WORD_LEN || len > max_len {
                return None;
            }

            LetterCounts::new(word)
                .is_subset_of(&available)
                .then(|| word.to_lowercase())
        })
        .collect();

    debug!(
        "subset filter: {} of {scanned} words formable from {max_len} letters",
        found.len()
    );

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excludes_single_letters_and_long_words() {
        let found = find_subset_words("abc", ["a", "ab", "abcd", "ba"]);
        assert_eq!(found, vec!["ab", "ba"]);
    }

    #[test]
    fn duplicate_letters_are_accounted() {
        let found = find_subset_words("aab", ["aa", "aab", "aabb"]);
        assert_eq!(found, vec!["aa", "aab"]);
    }

    #[test]
    fn empty_letters_yield_nothing() {
        let found = find_subset_words("", ["a", "ab", "abc"]);
        assert!(found.is_empty());
    }

    #[test]
    fn single_letter_pool_yields_nothing() {
        let found = find_subset_words("a", ["a", "aa"]);
        assert!(found.is_empty());
    }

    #[test]
    fn case_is_ignored_and_output_lowercased() {
        let found = find_subset_words("TaN", ["ANT", "Tan", "nat", "tin"]);
        assert_eq!(found, vec!["ant", "tan", "nat"]);
    }

    #[test]
    fn words_with_unavailable_letters_rejected() {
        let found = find_subset_words("stone", ["tones", "notes", "stoned", "onset", "tense"]);
        assert_eq!(found, vec!["tones", "notes", "onset"]);
    }

    #[test]
    fn non_alphabetic_letters_are_countable() {
        let found = find_subset_words("a-b", ["a-b", "ab", "a--b"]);
        assert_eq!(found, vec!["a-b", "ab"]);
    }

    #[test]
    fn preserves_source_order_and_duplicates() {
        let found = find_subset_words("rat", ["tar", "art", "rat", "art"]);
        assert_eq!(found, vec!["tar", "art", "rat", "art"]);
    }

    #[test]
    fn accepts_owned_strings() {
        let source: Vec<String> = vec!["at".to_string(), "to".to_string()];
        let found = find_subset_words("cat", &source);
        assert_eq!(found, vec!["at"]);
    }

    #[test]
    fn repeated_calls_share_source() {
        let source = ["ant", "tan", "train", "rain"];
        let first = find_subset_words("train", source);
        let second = find_subset_words("train", source);
        assert_eq!(first, second);
        assert_eq!(first, vec!["ant", "tan", "train", "rain"]);
    }
}
