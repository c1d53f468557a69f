//! Template matcher
//!
//! Keeps the candidates that fit a positional template exactly.

use crate::core::Template;
use log::debug;

/// Find the candidates that match `template`
///
/// A candidate matches when its length equals the template length and every
/// fixed slot agrees with the candidate's letter at that position, ignoring
/// case. Matches are returned unmodified, in input order, duplicates kept.
///
/// # Examples
/// ```
/// use anagram_finder::core::Template;
/// use anagram_finder::finder::find_matching_words;
///
/// let template = Template::from_slots(&[None, Some('A'), Some('T')]);
/// let found = find_matching_words(["cat", "cot", "at"], &template);
/// assert_eq!(found, vec!["cat"]);
/// ```
pub fn find_matching_words<I, S>(candidates: I, template: &Template) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let found: Vec<String> = candidates
        .into_iter()
        .filter(|word| template.matches(word.as_ref()))
        .map(|word| word.as_ref().to_string())
        .collect();

    debug!("template {template}: {} matches", found.len());

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_exact_length() {
        let template = Template::from_slots(&[None, Some('A'), Some('T')]);
        let found = find_matching_words(["cat", "cot", "at"], &template);
        assert_eq!(found, vec!["cat"]);
    }

    #[test]
    fn wildcard_only_template_matches_length() {
        let template = Template::any(3);
        let found = find_matching_words(["cat", "dog", "mouse"], &template);
        assert_eq!(found, vec!["cat", "dog"]);
    }

    #[test]
    fn matching_is_idempotent() {
        let template: Template = "_n".parse().unwrap();
        let once = find_matching_words(["an", "in", "on", "at", "ant"], &template);
        let twice = find_matching_words(&once, &template);
        assert_eq!(once, vec!["an", "in", "on"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn duplicates_preserved() {
        let template: Template = "t__".parse().unwrap();
        let found = find_matching_words(["tan", "tin", "tan"], &template);
        assert_eq!(found, vec!["tan", "tin", "tan"]);
    }

    #[test]
    fn candidates_returned_unmodified() {
        let template: Template = "c_t".parse().unwrap();
        let found = find_matching_words(["CAT", "Cot", "dog"], &template);
        assert_eq!(found, vec!["CAT", "Cot"]);
    }

    #[test]
    fn template_longer_than_all_candidates_yields_nothing() {
        let template = Template::any(10);
        assert!(find_matching_words(["cat", "dog"], &template).is_empty());
    }

    #[test]
    fn empty_candidates_yield_nothing() {
        let template: Template = "_n".parse().unwrap();
        let none: [&str; 0] = [];
        assert!(find_matching_words(none, &template).is_empty());
    }
}
