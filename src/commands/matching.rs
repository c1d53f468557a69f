//! Template match command
//!
//! Matches a template against the whole dictionary, or against the anagrams
//! of a set of letters.

use crate::core::Template;
use crate::finder::{find_matching_words, find_subset_words};
use crate::wordlists::WordList;

/// Configuration for a template match
pub struct MatchConfig {
    pub template: Template,
    pub letters: Option<String>,
}

/// Result of a template match
pub struct MatchResult {
    pub template: Template,
    pub letters: Option<String>,
    /// Number of words the template was tested against
    pub pool_size: usize,
    pub matches: Vec<String>,
}

/// Match the configured template against `words`
///
/// With letters configured, only the anagrams of those letters are tested.
/// The letters are used as given, so blank letters leave nothing to match.
#[must_use]
pub fn match_words(config: MatchConfig, words: &WordList) -> MatchResult {
    let letters = config.letters;

    let (pool_size, matches) = match &letters {
        Some(letters) => {
            let anagrams = find_subset_words(letters, words);
            (anagrams.len(), find_matching_words(&anagrams, &config.template))
        }
        None => (words.len(), find_matching_words(words, &config.template)),
    };

    MatchResult {
        template: config.template,
        letters,
        pool_size,
        matches,
    }
}
