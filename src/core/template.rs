//! Positional letter templates
//!
//! A template is a fixed-length row of slots, each either a required letter or
//! a wildcard, like a partially filled crossword entry:
//! - `Slot::Fixed('n')` requires an `n` (any case) at that position
//! - `Slot::Any` accepts any single character
//!
//! Templates parse from strings such as `"_N"` or `"c?t"`, where `_`, `?`, `.`
//! and `*` mark wildcards.

use super::letters::fold_case;
use std::fmt;
use std::str::FromStr;

/// Characters accepted as wildcard markers when parsing
pub const WILDCARDS: [char; 4] = ['_', '?', '.', '*'];

/// A single template position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Required character, stored lowercased
    Fixed(char),
    /// Matches any character
    Any,
}

impl Slot {
    /// Build a fixed slot, folding the character to lowercase
    #[must_use]
    pub fn fixed(ch: char) -> Self {
        Self::Fixed(fold_case(ch))
    }

    /// Check whether an already-lowercased character satisfies this slot
    #[inline]
    #[must_use]
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Fixed(required) => required == ch,
            Self::Any => true,
        }
    }
}

impl From<Option<char>> for Slot {
    fn from(value: Option<char>) -> Self {
        value.map_or(Self::Any, Self::fixed)
    }
}

/// Error type for template strings that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    Empty,
    Whitespace(usize),
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Template must contain at least one slot"),
            Self::Whitespace(position) => {
                write!(f, "Template contains whitespace at position {position}")
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Fixed-length positional pattern
///
/// The template length is the exact word length it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    slots: Vec<Slot>,
}

impl Template {
    #[must_use]
    pub const fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// Template of `len` wildcards
    #[must_use]
    pub fn any(len: usize) -> Self {
        Self {
            slots: vec![Slot::Any; len],
        }
    }

    /// Build a template from optional letters, `None` being a wildcard
    ///
    /// # Examples
    /// ```
    /// use anagram_finder::core::Template;
    ///
    /// let template = Template::from_slots(&[None, Some('A'), Some('T')]);
    /// assert!(template.matches("cat"));
    /// assert!(!template.matches("cot"));
    /// ```
    #[must_use]
    pub fn from_slots(slots: &[Option<char>]) -> Self {
        Self {
            slots: slots.iter().copied().map(Slot::from).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Required word length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of fixed (non-wildcard) slots
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Fixed(_)))
            .count()
    }

    /// Check whether `word` has the template's length and satisfies every slot
    ///
    /// Comparison is case-insensitive; each word character is folded once.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        if word.chars().count() != self.slots.len() {
            return false;
        }

        word.chars()
            .map(fold_case)
            .zip(&self.slots)
            .all(|(ch, slot)| slot.accepts(ch))
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut slots = Vec::with_capacity(s.len());

        for (position, ch) in s.chars().enumerate() {
            if ch.is_whitespace() {
                return Err(TemplateError::Whitespace(position));
            }

            slots.push(if WILDCARDS.contains(&ch) {
                Slot::Any
            } else {
                Slot::fixed(ch)
            });
        }

        if slots.is_empty() {
            return Err(TemplateError::Empty);
        }

        Ok(Self { slots })
    }
}

impl fmt::Display for Template {
    /// Renders fixed letters uppercase and wildcards as `_`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Fixed(ch) => {
                    for upper in ch.to_uppercase() {
                        write!(f, "{upper}")?;
                    }
                }
                Slot::Any => write!(f, "_")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mixed_template() {
        let template: Template = "_N".parse().unwrap();
        assert_eq!(template.slots(), &[Slot::Any, Slot::Fixed('n')]);
        assert_eq!(template.len(), 2);
        assert_eq!(template.fixed_count(), 1);
    }

    #[test]
    fn parse_accepts_every_wildcard_marker() {
        for input in ["_a", "?a", ".a", "*a"] {
            let template: Template = input.parse().unwrap();
            assert_eq!(template.slots()[0], Slot::Any, "input {input}");
        }
    }

    #[test]
    fn parse_lowercases_fixed_letters() {
        let upper: Template = "CAT".parse().unwrap();
        let lower: Template = "cat".parse().unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!("".parse::<Template>(), Err(TemplateError::Empty));
    }

    #[test]
    fn parse_rejects_whitespace() {
        assert_eq!("c t".parse::<Template>(), Err(TemplateError::Whitespace(1)));
        assert_eq!(" ct".parse::<Template>(), Err(TemplateError::Whitespace(0)));
    }

    #[test]
    fn from_slots_matches_parsed() {
        let built = Template::from_slots(&[None, Some('N')]);
        let parsed: Template = "?n".parse().unwrap();
        assert_eq!(built, parsed);
    }

    #[test]
    fn any_template_has_no_fixed_slots() {
        let template = Template::any(4);
        assert_eq!(template.len(), 4);
        assert_eq!(template.fixed_count(), 0);
        assert!(template.matches("abcd"));
        assert!(!template.matches("abc"));
    }

    #[test]
    fn matches_requires_exact_length() {
        let template: Template = "_at".parse().unwrap();
        assert!(template.matches("cat"));
        assert!(!template.matches("at"));
        assert!(!template.matches("cats"));
    }

    #[test]
    fn matches_ignores_case() {
        let template: Template = "C_T".parse().unwrap();
        assert!(template.matches("cat"));
        assert!(template.matches("COT"));
        assert!(template.matches("cUt"));
        assert!(!template.matches("cab"));
    }

    #[test]
    fn empty_template_matches_only_empty_word() {
        let template = Template::new(Vec::new());
        assert!(template.is_empty());
        assert!(template.matches(""));
        assert!(!template.matches("a"));
    }

    #[test]
    fn display_uppercases_and_marks_wildcards() {
        let template: Template = "?n.t".parse().unwrap();
        assert_eq!(template.to_string(), "_N_T");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TemplateError::Empty.to_string(),
            "Template must contain at least one slot"
        );
        assert_eq!(
            TemplateError::Whitespace(3).to_string(),
            "Template contains whitespace at position 3"
        );
    }
}
