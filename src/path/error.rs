use crate::grid::Position;
use thiserror::Error;

// Error type for building a path from an arbitrary position sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Error when the position sequence is empty.
    #[error("A path needs at least one position.")]
    Empty,

    /// Error when two consecutive positions are not one cardinal step apart.
    #[error("Step {index} from {from} to {to} is not a single up/down/left/right move.")]
    NotAdjacent {
        index: usize,
        from: Position,
        to: Position,
    },

    /// Error when a position appears twice in the sequence.
    #[error("Position {position} is repeated at index {index}.")]
    Repeated { index: usize, position: Position },
}
