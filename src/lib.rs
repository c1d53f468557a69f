//! Anagram Finder
//!
//! Finds the words that can be spelled from a set of letters and filters them
//! by a crossword-style positional template.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_finder::core::Template;
//! use anagram_finder::finder::{find_matching_words, find_subset_words};
//!
//! let dictionary = ["a", "an", "ant", "at", "in", "tan"];
//! let anagrams = find_subset_words("tan", dictionary);
//! assert_eq!(anagrams, vec!["an", "ant", "at", "tan"]);
//!
//! // Two-letter words ending in N
//! let template: Template = "_n".parse().unwrap();
//! assert_eq!(find_matching_words(&anagrams, &template), vec!["an"]);
//! ```

// Core domain types
pub mod core;

// Subset-anagram and template filters
pub mod finder;

// Word lists
pub mod wordlists;

// Crossword puzzle layout
pub mod layout;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
