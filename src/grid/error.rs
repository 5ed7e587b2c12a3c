use super::cell::Landmark;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for grid construction.
/// Every variant is detected while building a `Grid`, before any search runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Error when no maze lines were supplied at all.
    #[error("Maze input is empty, no rows were supplied.")]
    EmptyInput,

    /// Error when a row does not have the same length as the first row.
    #[error("Row {row} has length {found}, expected {expected}.")]
    MalformedGrid {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// Error when a landmark is absent or appears more than once.
    #[error("Expected exactly one {} cell ('{}'), found {}.", .landmark, .landmark.symbol(), .count)]
    MissingLandmark { landmark: Landmark, count: usize },
}
