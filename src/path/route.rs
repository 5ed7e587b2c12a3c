use super::error::PathError;
use crate::grid::{Direction, Position};
use std::collections::HashSet;

/// A single move along a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub from: Position,
    pub to: Position,
    pub direction: Direction,
}

/// A simple path through the maze.
///
/// Positions are pairwise distinct and every consecutive pair is one cardinal
/// move apart. The sequence is never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MazePath {
    positions: Vec<Position>,
}

impl MazePath {
    /// Wraps positions the explorer has already proven to form a simple path.
    pub(super) fn from_search(positions: Vec<Position>) -> Self {
        debug_assert!(!positions.is_empty());
        Self { positions }
    }

    /// Builds a path from an arbitrary position sequence, checking that it is
    /// non-empty, cardinally connected and free of repeats.
    pub fn try_from_positions(positions: Vec<Position>) -> Result<Self, PathError> {
        if positions.is_empty() {
            return Err(PathError::Empty);
        }

        let mut seen = HashSet::with_capacity(positions.len());
        for (index, position) in positions.iter().enumerate() {
            if !seen.insert(*position) {
                return Err(PathError::Repeated {
                    index,
                    position: *position,
                });
            }
            if index > 0 {
                let from = positions[index - 1];
                if Direction::between(from, *position).is_none() {
                    return Err(PathError::NotAdjacent {
                        index,
                        from,
                        to: *position,
                    });
                }
            }
        }

        Ok(Self { positions })
    }

    /// Number of moves, i.e. positions minus one.
    pub fn length(&self) -> usize {
        self.positions.len() - 1
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn first(&self) -> Position {
        self.positions[0]
    }

    pub fn last(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// True if `pos` lies strictly between the endpoints of this path.
    pub fn passes_through(&self, pos: Position) -> bool {
        let n = self.positions.len();
        n > 2 && self.positions[1..n - 1].contains(&pos)
    }

    /// Moves of this path in order, each labelled with its direction.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        self.positions.windows(2).filter_map(|pair| {
            Direction::between(pair[0], pair[1]).map(|direction| Step {
                from: pair[0],
                to: pair[1],
                direction,
            })
        })
    }

    /// Direction label of every move, in order.
    pub fn directions(&self) -> Vec<Direction> {
        self.steps().map(|step| step.direction).collect()
    }
}
