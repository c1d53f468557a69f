//! Puzzle grid construction
//!
//! The base word runs horizontally on the base row. Each placement runs
//! vertically through one base column, so the grid is as wide as the base
//! word and tall enough to hold the highest and lowest crossing letters.

use super::placement::Placement;
use crate::core::{Slot, Template, fold_case};
use std::fmt;

/// Role of an occupied grid square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Letter of the base word, always shown
    Root,
    /// Letter of a crossing word the player must fill in
    Unknown,
    /// Letter of a crossing word revealed up front
    Prefilled,
}

/// One occupied square of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub ch: char,
    pub kind: CellKind,
    /// 0 for the base word, `n` for the n-th placement
    pub word_index: usize,
    pub letter_index: usize,
}

/// Error type for placements that do not fit the base word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    EmptyBaseWord,
    InvalidColumn {
        word: String,
        column: usize,
        width: usize,
    },
    InvalidOverlap {
        word: String,
        overlap: usize,
        len: usize,
    },
    CharacterMismatch {
        word: String,
        column: usize,
        expected: char,
        found: char,
    },
    InvalidPrefilled {
        word: String,
        index: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBaseWord => write!(f, "Base word must not be empty"),
            Self::InvalidColumn {
                word,
                column,
                width,
            } => write!(
                f,
                "Invalid column {column} for word \"{word}\": must be between 0 and {}",
                width.saturating_sub(1)
            ),
            Self::InvalidOverlap { word, overlap, len } => write!(
                f,
                "Invalid overlap {overlap} for word \"{word}\": must be between 0 and {}",
                len.saturating_sub(1)
            ),
            Self::CharacterMismatch {
                word,
                column,
                expected,
                found,
            } => write!(
                f,
                "Character mismatch for word \"{word}\" at column {column}: expected '{expected}', got '{found}'"
            ),
            Self::InvalidPrefilled { word, index } => {
                write!(f, "Prefilled index {index} is outside word \"{word}\"")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Validated crossword layout around a base word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleLayout {
    base_word: String,
    placements: Vec<Placement>,
    rows: usize,
    cols: usize,
    base_row: usize,
    cells: Vec<Cell>,
}

impl PuzzleLayout {
    /// Validate `placements` against `base_word` and compute the grid
    ///
    /// # Errors
    ///
    /// Returns a `LayoutError` for the first placement whose column, overlap,
    /// overlap letter, or prefilled indices do not fit.
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::layout::{Placement, PuzzleLayout};
    ///
    /// // "AN" hangs from the N of "TAN", ending on the base row
    /// let layout = PuzzleLayout::build("tan", vec![Placement::new("an", 2, 1)]).unwrap();
    /// assert_eq!((layout.rows(), layout.cols()), (2, 3));
    /// assert_eq!(layout.base_row(), 1);
    /// assert_eq!(layout.cell_at(0, 2).map(|cell| cell.ch), Some('A'));
    /// ```
    pub fn build(base_word: &str, placements: Vec<Placement>) -> Result<Self, LayoutError> {
        let base_word = base_word.trim().to_uppercase();
        let base: Vec<char> = base_word.chars().collect();
        if base.is_empty() {
            return Err(LayoutError::EmptyBaseWord);
        }

        let mut min_row: isize = 0;
        let mut max_row: isize = 0;

        for placement in &placements {
            let letters: Vec<char> = placement.word().chars().collect();
            validate(placement, &letters, &base)?;

            let overlap = placement.overlap() as isize;
            min_row = min_row.min(-overlap);
            max_row = max_row.max(letters.len() as isize - 1 - overlap);
        }

        let rows = (max_row - min_row + 1) as usize;
        let base_row = (-min_row) as usize;

        let mut cells: Vec<Cell> = base
            .iter()
            .enumerate()
            .map(|(i, &ch)| Cell {
                row: base_row,
                col: i,
                ch,
                kind: CellKind::Root,
                word_index: 0,
                letter_index: i,
            })
            .collect();

        for (index, placement) in placements.iter().enumerate() {
            for (letter_index, ch) in placement.word().chars().enumerate() {
                if letter_index == placement.overlap() {
                    continue;
                }

                let row = base_row + letter_index - placement.overlap();
                let kind = if placement.is_prefilled(letter_index) {
                    CellKind::Prefilled
                } else {
                    CellKind::Unknown
                };

                cells.push(Cell {
                    row,
                    col: placement.column(),
                    ch,
                    kind,
                    word_index: index + 1,
                    letter_index,
                });
            }
        }

        Ok(Self {
            cols: base.len(),
            base_word,
            placements,
            rows,
            base_row,
            cells,
        })
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Row index of the base word
    #[inline]
    #[must_use]
    pub const fn base_row(&self) -> usize {
        self.base_row
    }

    #[inline]
    #[must_use]
    pub fn base_word(&self) -> &str {
        &self.base_word
    }

    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Every cell definition, base word first, then placements in order
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at a coordinate; the latest definition wins on conflicts
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells
            .iter()
            .rev()
            .find(|cell| cell.row == row && cell.col == col)
    }

    /// Base word followed by each placement's word
    #[must_use]
    pub fn solution_words(&self) -> Vec<&str> {
        std::iter::once(self.base_word.as_str())
            .chain(self.placements.iter().map(Placement::word))
            .collect()
    }

    /// Template each placement's word must satisfy, in placement order
    #[must_use]
    pub fn templates(&self) -> Vec<Template> {
        self.placements
            .iter()
            .filter_map(|p| column_template(&self.base_word, p.column(), p.overlap(), p.len()))
            .collect()
    }
}

fn validate(placement: &Placement, letters: &[char], base: &[char]) -> Result<(), LayoutError> {
    let word = placement.word().to_string();
    let column = placement.column();
    let overlap = placement.overlap();

    let Some(&expected) = base.get(column) else {
        return Err(LayoutError::InvalidColumn {
            word,
            column,
            width: base.len(),
        });
    };

    let Some(&found) = letters.get(overlap) else {
        return Err(LayoutError::InvalidOverlap {
            word,
            overlap,
            len: letters.len(),
        });
    };

    if fold_case(found) != fold_case(expected) {
        return Err(LayoutError::CharacterMismatch {
            word,
            column,
            expected,
            found,
        });
    }

    if let Some(&index) = placement.prefilled().iter().find(|&&i| i >= letters.len()) {
        return Err(LayoutError::InvalidPrefilled { word, index });
    }

    Ok(())
}

/// Template for a word of length `len` crossing `base_word` at `column`
///
/// The slot at `overlap` is fixed to the base letter in that column; every
/// other slot is a wildcard. Returns `None` when `column` or `overlap` is out
/// of range.
///
/// # Examples
/// ```
/// use anagram_finder::layout::column_template;
///
/// let template = column_template("tan", 2, 1, 2).unwrap();
/// assert_eq!(template.to_string(), "_N");
/// assert!(column_template("tan", 3, 0, 2).is_none());
/// ```
#[must_use]
pub fn column_template(base_word: &str, column: usize, overlap: usize, len: usize) -> Option<Template> {
    let letter = base_word.chars().nth(column)?;
    if overlap >= len {
        return None;
    }

    let mut slots = vec![Slot::Any; len];
    slots[overlap] = Slot::fixed(letter);
    Some(Template::new(slots))
}
