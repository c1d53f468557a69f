//! Anagram search command
//!
//! Finds the words spellable from a set of letters and, optionally, the subset
//! of those that fit a template.

use crate::core::Template;
use crate::finder::{find_matching_words, find_subset_words};
use crate::wordlists::WordList;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Configuration for an anagram search
pub struct FindConfig {
    pub letters: String,
    pub template: Option<Template>,
    pub hints: usize,
}

impl FindConfig {
    #[must_use]
    pub const fn new(letters: String) -> Self {
        Self {
            letters,
            template: None,
            hints: 0,
        }
    }

    #[must_use]
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    #[must_use]
    pub const fn with_hints(mut self, hints: usize) -> Self {
        self.hints = hints;
        self
    }
}

/// Result of an anagram search
pub struct FindResult {
    pub letters: String,
    /// Formable words, in dictionary order
    pub anagrams: Vec<String>,
    /// Template and the anagrams matching it, when a template was given
    pub matches: Option<(Template, Vec<String>)>,
    /// Randomly chosen anagrams to offer as hints
    pub hints: Vec<String>,
    pub dictionary_size: usize,
}

/// Run an anagram search against `words`
///
/// Letters are used as given, whitespace included; empty letters yield an
/// empty result.
#[must_use]
pub fn find_words<R: Rng + ?Sized>(
    config: FindConfig,
    words: &WordList,
    rng: &mut R,
) -> FindResult {
    let letters = config.letters;
    let anagrams = find_subset_words(&letters, words);

    let matches = config.template.map(|template| {
        let matching = find_matching_words(&anagrams, &template);
        (template, matching)
    });

    let hints = anagrams
        .choose_multiple(rng, config.hints)
        .cloned()
        .collect();

    FindResult {
        letters,
        anagrams,
        matches,
        hints,
        dictionary_size: words.len(),
    }
}
