//! Command implementations

pub mod batch;
pub mod find;
pub mod grid;
pub mod matching;
pub mod prompt;

pub use batch::{BatchConfig, BatchEntry, BatchStatistics, run_batch};
pub use find::{FindConfig, FindResult, find_words};
pub use grid::{GridResult, PlacementFit, build_grid};
pub use matching::{MatchConfig, MatchResult, match_words};
pub use prompt::prompt_letters;
