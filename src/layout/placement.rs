//! Crossing-word placements
//!
//! A placement hangs a word vertically from one column of the base word. The
//! letter at `overlap` sits on the base row and must equal the base letter in
//! that column.

use std::fmt;
use std::str::FromStr;

/// A word crossing the base word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    word: String,
    column: usize,
    overlap: usize,
    prefilled: Vec<usize>,
}

impl Placement {
    /// Create a placement; the word is stored uppercased
    #[must_use]
    pub fn new(word: &str, column: usize, overlap: usize) -> Self {
        Self {
            word: word.to_uppercase(),
            column,
            overlap,
            prefilled: Vec::new(),
        }
    }

    /// Reveal the letters at `indices` up front
    #[must_use]
    pub fn with_prefilled(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.prefilled = indices.into_iter().collect();
        self
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[inline]
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    #[inline]
    #[must_use]
    pub fn prefilled(&self) -> &[usize] {
        &self.prefilled
    }

    #[inline]
    #[must_use]
    pub fn is_prefilled(&self, letter_index: usize) -> bool {
        self.prefilled.contains(&letter_index)
    }

    /// Word length in characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.word, self.column, self.overlap)?;
        if !self.prefilled.is_empty() {
            let indices: Vec<String> = self.prefilled.iter().map(ToString::to_string).collect();
            write!(f, "+{}", indices.join(","))?;
        }
        Ok(())
    }
}

/// Error type for placement strings that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementParseError {
    MissingWord,
    MissingColumn,
    MissingOverlap,
    InvalidNumber(String),
}

impl fmt::Display for PlacementParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWord => write!(f, "Placement needs a word before '@'"),
            Self::MissingColumn => write!(f, "Placement needs '@COLUMN' after the word"),
            Self::MissingOverlap => write!(f, "Placement needs ':OVERLAP' after the column"),
            Self::InvalidNumber(value) => write!(f, "Invalid index '{value}' in placement"),
        }
    }
}

impl std::error::Error for PlacementParseError {}

fn parse_index(value: &str) -> Result<usize, PlacementParseError> {
    value
        .trim()
        .parse()
        .map_err(|_| PlacementParseError::InvalidNumber(value.to_string()))
}

impl FromStr for Placement {
    type Err = PlacementParseError;

    /// Parse `WORD@COLUMN:OVERLAP`, optionally followed by `+I,J,...`
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::layout::Placement;
    ///
    /// let placement: Placement = "ant@1:1+0".parse().unwrap();
    /// assert_eq!(placement.word(), "ANT");
    /// assert_eq!(placement.column(), 1);
    /// assert_eq!(placement.overlap(), 1);
    /// assert_eq!(placement.prefilled(), &[0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (word, rest) = s
            .split_once('@')
            .ok_or(PlacementParseError::MissingColumn)?;
        let word = word.trim();
        if word.is_empty() {
            return Err(PlacementParseError::MissingWord);
        }

        let (position, prefilled) = match rest.split_once('+') {
            Some((position, prefilled)) => (position, Some(prefilled)),
            None => (rest, None),
        };

        let (column, overlap) = position
            .split_once(':')
            .ok_or(PlacementParseError::MissingOverlap)?;
        if column.trim().is_empty() {
            return Err(PlacementParseError::MissingColumn);
        }
        if overlap.trim().is_empty() {
            return Err(PlacementParseError::MissingOverlap);
        }

        let mut placement = Self::new(word, parse_index(column)?, parse_index(overlap)?);

        if let Some(prefilled) = prefilled {
            placement.prefilled = prefilled
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(parse_index)
                .collect::<Result<_, _>>()?;
        }

        Ok(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uppercases_word() {
        let placement = Placement::new("ant", 1, 0);
        assert_eq!(placement.word(), "ANT");
        assert_eq!(placement.len(), 3);
        assert!(placement.prefilled().is_empty());
    }

    #[test]
    fn with_prefilled_records_indices() {
        let placement = Placement::new("train", 0, 0).with_prefilled([2, 4]);
        assert!(placement.is_prefilled(2));
        assert!(placement.is_prefilled(4));
        assert!(!placement.is_prefilled(0));
    }

    #[test]
    fn parse_without_prefilled() {
        let placement: Placement = "rain@2:1".parse().unwrap();
        assert_eq!(placement, Placement::new("RAIN", 2, 1));
    }

    #[test]
    fn parse_with_prefilled() {
        let placement: Placement = "rain@2:1+0,3".parse().unwrap();
        assert_eq!(placement.prefilled(), &[0, 3]);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "rain".parse::<Placement>(),
            Err(PlacementParseError::MissingColumn)
        );
        assert_eq!(
            "@1:0".parse::<Placement>(),
            Err(PlacementParseError::MissingWord)
        );
        assert_eq!(
            "rain@1".parse::<Placement>(),
            Err(PlacementParseError::MissingOverlap)
        );
        assert_eq!(
            "rain@:0".parse::<Placement>(),
            Err(PlacementParseError::MissingColumn)
        );
        assert_eq!(
            "rain@x:0".parse::<Placement>(),
            Err(PlacementParseError::InvalidNumber("x".to_string()))
        );
        assert_eq!(
            "rain@1:0+a".parse::<Placement>(),
            Err(PlacementParseError::InvalidNumber("a".to_string()))
        );
    }

    #[test]
    fn display_round_trips_cli_form() {
        let placement = Placement::new("rain", 2, 1).with_prefilled([0, 3]);
        assert_eq!(placement.to_string(), "RAIN@2:1+0,3");
        assert_eq!(Placement::new("an", 1, 1).to_string(), "AN@1:1");
    }
}
