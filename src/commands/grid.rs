//! Puzzle grid command
//!
//! Lays crossing words over a base word and reports, for each crossing, how
//! many anagrams of the base word fit its column.

use crate::core::Template;
use crate::finder::{find_matching_words, find_subset_words};
use crate::layout::{Placement, PuzzleLayout};
use crate::wordlists::WordList;

/// Candidates for one placement's column
pub struct PlacementFit {
    pub placement: Placement,
    pub template: Template,
    /// Anagrams of the base word matching the column template
    pub candidates: Vec<String>,
    /// Whether the placed word is itself one of the base word's anagrams
    pub is_anagram: bool,
}

/// Result of building a puzzle grid
pub struct GridResult {
    pub layout: PuzzleLayout,
    pub anagram_count: usize,
    pub fits: Vec<PlacementFit>,
}

/// Build the grid for `base_word` and score each placement's column
///
/// # Errors
///
/// Returns an error if a placement does not fit the base word.
pub fn build_grid(
    base_word: &str,
    placements: Vec<Placement>,
    words: &WordList,
) -> Result<GridResult, String> {
    let layout = PuzzleLayout::build(base_word, placements).map_err(|e| e.to_string())?;
    let anagrams = find_subset_words(layout.base_word(), words);

    let fits = layout
        .placements()
        .iter()
        .zip(layout.templates())
        .map(|(placement, template)| {
            let candidates = find_matching_words(&anagrams, &template);
            let placed = placement.word().to_lowercase();
            PlacementFit {
                placement: placement.clone(),
                is_anagram: anagrams.contains(&placed),
                template,
                candidates,
            }
        })
        .collect();

    Ok(GridResult {
        anagram_count: anagrams.len(),
        layout,
        fits,
    })
}
