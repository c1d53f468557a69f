//! Formatting utilities for terminal output

use crate::layout::{CellKind, PuzzleLayout};

/// Marker drawn for a letter the player still has to find
pub const HIDDEN_CELL: char = '_';

/// Marker drawn for an empty grid square
pub const EMPTY_CELL: char = ' ';

/// Order words longest first, keeping the input order among equal lengths
#[must_use]
pub fn sort_by_length_desc<S: AsRef<str>>(words: &[S]) -> Vec<&str> {
    let mut sorted: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    sorted.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
    sorted
}

/// Join words with commas, truncating after `limit` entries
///
/// The truncated tail is summarized as `... (N more)`.
#[must_use]
pub fn format_word_list<S: AsRef<str>>(words: &[S], limit: Option<usize>) -> String {
    let shown = limit.unwrap_or(words.len()).min(words.len());
    let mut line = words[..shown]
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ");

    let hidden = words.len() - shown;
    if hidden > 0 {
        if !line.is_empty() {
            line.push_str(", ");
        }
        line.push_str(&format!("... ({hidden} more)"));
    }

    line
}

/// Singular or plural noun for `count`
#[must_use]
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Render the grid as plain text rows
///
/// Base-word and prefilled letters are always shown. Unknown letters are
/// shown when `reveal` is set, otherwise drawn as [`HIDDEN_CELL`].
#[must_use]
pub fn render_grid(layout: &PuzzleLayout, reveal: bool) -> Vec<String> {
    (0..layout.rows())
        .map(|row| {
            (0..layout.cols())
                .map(|col| match layout.cell_at(row, col) {
                    Some(cell) if cell.kind == CellKind::Unknown && !reveal => HIDDEN_CELL,
                    Some(cell) => cell.ch,
                    None => EMPTY_CELL,
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Placement;

    #[test]
    fn sort_by_length_desc_is_stable() {
        let words = ["at", "tan", "an", "train", "ant"];
        assert_eq!(
            sort_by_length_desc(&words),
            vec!["train", "tan", "ant", "at", "an"]
        );
    }

    #[test]
    fn sort_empty() {
        let words: Vec<String> = Vec::new();
        assert!(sort_by_length_desc(&words).is_empty());
    }

    #[test]
    fn word_list_without_limit() {
        assert_eq!(format_word_list(&["an", "at"], None), "an, at");
    }

    #[test]
    fn word_list_truncated() {
        assert_eq!(
            format_word_list(&["an", "at", "tan", "nat"], Some(2)),
            "an, at, ... (2 more)"
        );
        assert_eq!(format_word_list(&["an", "at"], Some(0)), "... (2 more)");
    }

    #[test]
    fn word_list_limit_above_len() {
        assert_eq!(format_word_list(&["an"], Some(10)), "an");
        let empty: [&str; 0] = [];
        assert_eq!(format_word_list(&empty, Some(3)), "");
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize(1, "word", "words"), "1 word");
        assert_eq!(pluralize(0, "word", "words"), "0 words");
        assert_eq!(pluralize(12, "word", "words"), "12 words");
    }

    #[test]
    fn render_hidden_and_revealed() {
        let layout = PuzzleLayout::build(
            "train",
            vec![Placement::new("rain", 2, 1).with_prefilled([3])],
        )
        .unwrap();

        assert_eq!(
            render_grid(&layout, false),
            vec!["  _  ", "TRAIN", "  _  ", "  N  "]
        );
        assert_eq!(
            render_grid(&layout, true),
            vec!["  R  ", "TRAIN", "  I  ", "  N  "]
        );
    }
}
