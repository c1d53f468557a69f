//! Core domain types for anagram search
//!
//! Letter multisets and positional templates. Everything here is pure and
//! independent of where words come from.

mod letters;
mod template;

pub use letters::{LetterCounts, fold_case};
pub use template::{Slot, Template, TemplateError, WILDCARDS};
