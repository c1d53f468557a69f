//! Letter multiset representation
//!
//! A `LetterCounts` records how many times each (lowercased) character occurs
//! in a string, and answers whether one multiset can be drawn from another.

use rustc_hash::FxHashMap;
use std::fmt;

/// Per-character occurrence counts of a string
///
/// Characters are lowercased on construction, so two strings differing only
/// in case produce equal multisets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterCounts {
    /// Count the characters of `text`, ignoring case
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::core::LetterCounts;
    ///
    /// let counts = LetterCounts::new("Banana");
    /// assert_eq!(counts.count('a'), 3);
    /// assert_eq!(counts.count('n'), 2);
    /// assert_eq!(counts.count('z'), 0);
    /// assert_eq!(counts.total(), 6);
    /// ```
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        let mut total = 0;

        for ch in text.chars().map(fold_case) {
            *counts.entry(ch).or_insert(0) += 1;
            total += 1;
        }

        Self { counts, total }
    }

    /// Occurrences of `ch` (zero when absent)
    ///
    /// `ch` is expected in lowercase form.
    #[inline]
    #[must_use]
    pub fn count(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Total number of characters counted
    #[inline]
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Check whether every character here can be drawn from `available`
    ///
    /// Characters missing from `available` have an available count of zero.
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::core::LetterCounts;
    ///
    /// let pool = LetterCounts::new("aab");
    /// assert!(LetterCounts::new("aa").is_subset_of(&pool));
    /// assert!(!LetterCounts::new("abb").is_subset_of(&pool));
    /// ```
    #[must_use]
    pub fn is_subset_of(&self, available: &Self) -> bool {
        if self.total > available.total {
            return false;
        }

        self.counts
            .iter()
            .all(|(&ch, &needed)| needed <= available.count(ch))
    }

    /// Iterate over `(character, count)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }
}

/// Lowercase a single character, keeping one character per input character
///
/// Characters whose lowercase form expands to several characters keep only
/// the first, so character counts and word lengths stay aligned.
#[inline]
#[must_use]
pub fn fold_case(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

impl fmt::Display for LetterCounts {
    /// Renders the multiset as its sorted letters, e.g. `aabn`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<(char, usize)> = self.iter().collect();
        pairs.sort_unstable_by_key(|&(ch, _)| ch);

        for (ch, count) in pairs {
            for _ in 0..count {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
