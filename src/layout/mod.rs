//! Crossword puzzle layout
//!
//! Places crossing words vertically over a horizontal base word, validates
//! that each crossing shares the base letter, and computes the resulting grid.
//! Each placement also yields the template its word must satisfy, which ties
//! the layout back to the template matcher.

mod grid;
mod placement;

pub use grid::{Cell, CellKind, LayoutError, PuzzleLayout, column_template};
pub use placement::{Placement, PlacementParseError};
