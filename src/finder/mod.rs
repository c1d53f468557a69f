//! Word filters
//!
//! Two pure filters over an ordered word sequence:
//! - [`find_subset_words`]: words spellable from a pool of letters
//! - [`find_matching_words`]: words fitting a positional template
//!
//! The template filter is usually fed the output of the subset filter.

mod matcher;
mod subset;

pub use matcher::find_matching_words;
pub use subset::{MIN_WORD_LEN, find_subset_words};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LetterCounts, Template};
    use proptest::prelude::*;

    #[test]
    fn filters_compose() {
        let source = ["a", "an", "ant", "tan", "nat", "at", "in", "rant"];
        let anagrams = find_subset_words("tan", source);
        let template = Template::from_slots(&[None, Some('N')]);

        assert_eq!(anagrams, vec!["an", "ant", "tan", "nat", "at"]);
        assert_eq!(find_matching_words(&anagrams, &template), vec!["an"]);
    }

    fn word() -> impl Strategy<Value = String> {
        "[a-eA-E]{0,7}"
    }

    fn template_slot() -> impl Strategy<Value = Option<char>> {
        prop_oneof![Just(None), proptest::char::range('a', 'e').prop_map(Some)]
    }

    proptest! {
        #[test]
        fn accepted_words_draw_from_letters(
            letters in word(),
            source in proptest::collection::vec(word(), 0..40),
        ) {
            let pool = LetterCounts::new(&letters);
            for found in find_subset_words(&letters, &source) {
                prop_assert!(found.chars().count() > 1);
                let counts = LetterCounts::new(&found);
                for (ch, count) in counts.iter() {
                    prop_assert!(count <= pool.count(ch), "{found} overdraws {ch}");
                }
            }
        }

        #[test]
        fn subset_output_preserves_source_order(
            letters in word(),
            source in proptest::collection::vec(word(), 0..40),
        ) {
            let found = find_subset_words(&letters, &source);
            let lowered: Vec<String> = source.iter().map(|w| w.to_lowercase()).collect();

            let mut position = 0;
            for word in &found {
                let offset = lowered[position..].iter().position(|w| w == word);
                prop_assert!(offset.is_some());
                position += offset.unwrap_or(0) + 1;
            }
        }

        #[test]
        fn template_matching_is_a_fixed_point(
            slots in proptest::collection::vec(template_slot(), 1..6),
            candidates in proptest::collection::vec(word(), 0..40),
        ) {
            let template = Template::from_slots(&slots);
            let once = find_matching_words(&candidates, &template);
            let twice = find_matching_words(&once, &template);
            prop_assert_eq!(&once, &twice);

            let expected: Vec<String> = candidates
                .iter()
                .filter(|w| template.matches(w))
                .cloned()
                .collect();
            prop_assert_eq!(once, expected);
        }

        #[test]
        fn wildcard_template_keeps_every_word_of_its_length(
            len in 1usize..6,
            candidates in proptest::collection::vec(word(), 0..40),
        ) {
            let found = find_matching_words(&candidates, &Template::any(len));
            let expected: Vec<String> = candidates
                .iter()
                .filter(|w| w.chars().count() == len)
                .cloned()
                .collect();
            prop_assert_eq!(found, expected);
        }
    }
}
